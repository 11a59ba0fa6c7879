//! Seiswave Core - seismic source wavelet synthesis
//!
//! Closed-form generators for the four classic seismic source wavelets,
//! each producing a discretized amplitude sequence and its time axis.
//!
//! # Wavelet Families
//!
//! | Family | Parameters | Axis | Shape |
//! |--------|-----------|------|-------|
//! | [`RickerParams`] | `frequency`, `duration` | centered | Zero-phase Gaussian derivative |
//! | [`OrmsbyParams`] | `f1 < f2 < f3 < f4`, `duration` | centered | Trapezoidal band-pass |
//! | [`KlauderParams`] | `f1 != f2`, `duration` | centered | Sweep autocorrelation |
//! | [`BerlageParams`] | `frequency`, `duration`, `n`, `α`, `φ` | causal | Decaying sinusoid |
//!
//! # Core Abstractions
//!
//! - [`Wavelet`] - Trait implemented by every parameter set
//! - [`WaveletParams`] - Tagged union over the four families
//! - [`WaveletEngine`] / [`generate`] - Entry point with a sample ceiling
//! - [`WaveletResult`] - Immutable `times` / `amplitudes` pair
//! - [`TimeAxis`] - Centered and causal sampling grids
//! - [`FrequencyLimits`] - Advisory frequency bounds derived from `dt`
//!
//! # Example
//!
//! ```rust
//! use seiswave_core::{generate, OrmsbyParams, WaveletParams};
//!
//! let params = WaveletParams::Ormsby(OrmsbyParams::new([5.0, 10.0, 40.0, 45.0], 0.5));
//! let result = generate(&params, 0.002).unwrap();
//!
//! assert_eq!(result.len(), result.times().len());
//! assert!(result.amplitudes().iter().all(|a| a.is_finite()));
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible (it needs `alloc`). Disable the default
//! `std` feature:
//!
//! ```toml
//! [dependencies]
//! seiswave-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Features
//!
//! - `std` (default)
//! - `tracing` - debug events per synthesis, warnings above Nyquist
//! - `serde` - `Serialize`/`Deserialize` for parameters, `Serialize` for results

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod berlage;
pub mod engine;
pub mod error;
pub mod kind;
pub mod klauder;
pub mod limits;
pub mod math;
pub mod ormsby;
pub mod ricker;
pub mod time_axis;
pub mod wavelet;

pub use berlage::{BerlageParams, DEFAULT_DECAY, DEFAULT_EXPONENT, DEFAULT_PHASE};
pub use engine::{DEFAULT_MAX_SAMPLES, WaveletEngine, generate};
pub use error::{Result, WaveletError};
pub use kind::WaveletKind;
pub use klauder::KlauderParams;
pub use limits::{FrequencyLimits, MAX_NYQUIST_FRACTION, MIN_FREQUENCY_HZ};
pub use ormsby::OrmsbyParams;
pub use ricker::RickerParams;
pub use time_axis::TimeAxis;
pub use wavelet::{Peak, Wavelet, WaveletParams, WaveletResult};
