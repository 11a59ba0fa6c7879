//! WAV file reading and writing.

use crate::playback::PlaybackBuffer;
use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels. Wavelets are always mono.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample: 16 or 24 (PCM), or 32 (IEEE float).
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Mono spec matching a buffer's sample rate.
    pub fn for_buffer(buffer: &PlaybackBuffer, bits_per_sample: u16) -> Self {
        Self {
            channels: 1,
            sample_rate: buffer.sample_rate(),
            bits_per_sample,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Write a playback buffer to a WAV file.
///
/// # Example
/// ```ignore
/// let spec = WavSpec::for_buffer(&buffer, 32);
/// write_wav("wavelet.wav", &buffer, spec)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &PlaybackBuffer, spec: WavSpec) -> Result<()> {
    if buffer.is_empty() {
        return Err(Error::EmptyBuffer);
    }
    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit samples (expected 16, 24 or 32)",
            spec.bits_per_sample
        )));
    }

    let path = path.as_ref();
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    if spec.bits_per_sample == 32 {
        for &sample in buffer.samples() {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
        for &sample in buffer.samples() {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    tracing::info!(
        path = %path.display(),
        samples = buffer.len(),
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "wrote WAV"
    );
    Ok(())
}

/// Read a mono or multi-channel WAV file as a playback buffer.
///
/// Multi-channel files are mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(PlaybackBuffer, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(Error::UnsupportedFormat("WAV file declares 0 channels".into()));
    }

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            if !(1..=32).contains(&bits) {
                return Err(Error::UnsupportedFormat(format!(
                    "{bits}-bit integer PCM cannot be read"
                )));
            }
            let max_val = (1i64 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok((PlaybackBuffer::from_samples(mono, spec.sample_rate), spec))
}
