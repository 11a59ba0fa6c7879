//! Normalized audio buffers for playing wavelets back.

use seiswave_analysis::normalize;
use seiswave_core::WaveletResult;

use crate::{Error, Result};

/// Mono audio ready for a player or a WAV writer.
///
/// Samples are the wavelet amplitudes divided by their peak magnitude, so
/// they lie in `[-1, 1]`; the sample rate is `round(1/dt)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl PlaybackBuffer {
    /// Build a buffer from a synthesized wavelet.
    ///
    /// Fails when `round(1/dt)` is zero or does not fit in a `u32`.
    pub fn from_wavelet(wavelet: &WaveletResult) -> Result<Self> {
        let rate = (1.0 / wavelet.dt()).round();
        if !(1.0..=f64::from(u32::MAX)).contains(&rate) {
            return Err(Error::InvalidSampleRate { dt: wavelet.dt() });
        }

        let samples = normalize(wavelet.amplitudes())
            .into_iter()
            .map(|s| s as f32)
            .collect();

        Ok(Self {
            samples,
            sample_rate: rate as u32,
        })
    }

    /// Wrap already-normalized samples.
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Repeat the buffer `count` times back to back (at least once).
    ///
    /// Fails when the result would hold more than `max_samples` samples.
    pub fn looped(&self, count: usize, max_samples: usize) -> Result<Self> {
        let count = count.max(1);
        let total = self
            .samples
            .len()
            .checked_mul(count)
            .filter(|&n| n <= max_samples)
            .ok_or(Error::TooManySamples {
                count,
                limit: max_samples,
            })?;

        let mut samples = Vec::with_capacity(total);
        for _ in 0..count {
            samples.extend_from_slice(&self.samples);
        }
        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// Audio samples in `[-1, 1]`.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}
