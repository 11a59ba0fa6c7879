//! Seiswave Analysis - post-processing over synthesized wavelets
//!
//! Pure functions over [`WaveletResult`](seiswave_core::WaveletResult) that
//! front ends need for display and playback:
//!
//! - [`fft`] - Real-input FFT wrapper returning bins `0..=N/2`
//! - [`spectrum`] - Magnitude spectrum with a frequency axis, peak and centroid
//! - [`dynamics`] - Peak, RMS, and peak normalization
//!
//! ## Example
//!
//! ```rust
//! use seiswave_analysis::magnitude_spectrum;
//! use seiswave_core::{generate, RickerParams};
//!
//! let wavelet = generate(&RickerParams::new(30.0, 1.0).into(), 0.001).unwrap();
//! let spectrum = magnitude_spectrum(&wavelet);
//!
//! assert_eq!(spectrum.len(), wavelet.len() / 2 + 1);
//! let (peak_hz, _) = spectrum.peak().unwrap();
//! assert!((peak_hz - 30.0).abs() < 2.0);
//! ```

pub mod dynamics;
pub mod fft;
pub mod spectrum;

pub use dynamics::{normalize, peak, rms};
pub use fft::Fft;
pub use spectrum::{Spectrum, magnitude_spectrum, spectrum_of};
