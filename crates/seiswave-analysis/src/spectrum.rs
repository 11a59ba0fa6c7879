//! Magnitude spectrum of a synthesized wavelet.
//!
//! The spectrum is `|FFT(amplitudes)|` over the non-negative bins
//! `0..=N/2`, where bin `k` sits at `k / (N dt)` Hz. No window is applied,
//! and the FFT length equals the sample count, so the result matches what a
//! plain real-input DFT of the wavelet would show.

use crate::fft::Fft;
use seiswave_core::WaveletResult;

/// Frequency-domain view of a wavelet.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
    bin_width: f64,
}

impl Spectrum {
    /// Bin center frequencies in Hz, starting at 0.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Linear magnitudes, one per bin.
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Spacing between bins, `1 / (N dt)` Hz.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Whether the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Iterate over `(frequency, magnitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }

    /// Frequency and magnitude of the strongest bin.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter().max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Spectral centroid (magnitude-weighted mean frequency) in Hz.
    ///
    /// Returns 0 for a silent spectrum.
    pub fn centroid(&self) -> f64 {
        let mut weighted_sum = 0.0;
        let mut magnitude_sum = 0.0;

        for (freq, mag) in self.iter() {
            weighted_sum += freq * mag;
            magnitude_sum += mag;
        }

        if magnitude_sum > 1e-12 {
            weighted_sum / magnitude_sum
        } else {
            0.0
        }
    }

    /// Magnitudes in dB, floored at -240 dB.
    pub fn magnitudes_db(&self) -> Vec<f64> {
        self.magnitudes
            .iter()
            .map(|&m| 20.0 * m.max(1e-12).log10())
            .collect()
    }

    /// Split into `(frequencies, magnitudes)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.frequencies, self.magnitudes)
    }
}

/// Magnitude spectrum of a wavelet.
pub fn magnitude_spectrum(wavelet: &WaveletResult) -> Spectrum {
    spectrum_of(wavelet.amplitudes(), wavelet.dt())
}

/// Magnitude spectrum of an arbitrary signal sampled every `dt` seconds.
pub fn spectrum_of(signal: &[f64], dt: f64) -> Spectrum {
    let n = signal.len();
    if n == 0 || dt.is_nan() || dt <= 0.0 {
        return Spectrum {
            frequencies: Vec::new(),
            magnitudes: Vec::new(),
            bin_width: 0.0,
        };
    }

    let bin_width = 1.0 / (n as f64 * dt);
    let spectrum = Fft::new(n).forward_real(signal);
    let magnitudes: Vec<f64> = spectrum.iter().map(|c| c.norm()).collect();
    let frequencies = (0..magnitudes.len()).map(|k| k as f64 * bin_width).collect();

    Spectrum {
        frequencies,
        magnitudes,
        bin_width,
    }
}
