//! Output layer for seiswave.
//!
//! This crate provides:
//!
//! - **Playback buffers**: [`PlaybackBuffer`] turns a wavelet into
//!   normalized audio at sample rate `round(1/dt)`, optionally looped
//! - **WAV file I/O**: [`write_wav`] and [`read_wav`] for rendering buffers
//! - **Numeric export**: CSV writers and the JSON [`WaveletResponse`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seiswave_core::{generate, RickerParams};
//! use seiswave_io::{PlaybackBuffer, WavSpec, write_wav};
//!
//! let wavelet = generate(&RickerParams::new(60.0, 0.5).into(), 0.0001)?;
//! let buffer = PlaybackBuffer::from_wavelet(&wavelet)?.looped(4, 1_000_000)?;
//! write_wav("ricker.wav", &buffer, WavSpec::for_buffer(&buffer, 16))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod export;
mod playback;
mod wav;

pub use export::{SpectrumData, WaveletResponse, write_csv, write_spectrum_csv};
pub use playback::PlaybackBuffer;
pub use wav::{WavSpec, read_wav, write_wav};

/// Error types for output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The buffer has no samples to write.
    #[error("playback buffer is empty")]
    EmptyBuffer,

    /// `dt` does not map to a usable audio sample rate.
    #[error("dt = {dt} s does not give a usable sample rate")]
    InvalidSampleRate {
        /// The offending sample interval.
        dt: f64,
    },

    /// Looping would produce more samples than allowed.
    #[error("{count} loops exceed the limit of {limit} samples")]
    TooManySamples {
        /// Requested repetitions.
        count: usize,
        /// Sample ceiling.
        limit: usize,
    },

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for output operations.
pub type Result<T> = std::result::Result<T, Error>;
