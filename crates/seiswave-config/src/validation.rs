//! Preset and settings validation.
//!
//! Wavelet parameters are checked twice: by the core rules every synthesis
//! applies, and against the [`FrequencyLimits`] for the preset's sample
//! interval. Every failure is collected rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use seiswave_config::{validate_params, ValidationError};
//! use seiswave_core::{RickerParams, WaveletParams};
//!
//! let params = WaveletParams::Ricker(RickerParams::new(60.0, 0.5));
//! assert!(validate_params(&params, 0.001).is_ok());
//!
//! // 300 Hz is above 0.9 x Nyquist at 2 ms.
//! let params = WaveletParams::Ricker(RickerParams::new(300.0, 0.5));
//! assert!(matches!(
//!     validate_params(&params, 0.002),
//!     Err(ValidationError::FrequencyOutOfRange { .. })
//! ));
//! ```

use seiswave_core::{FrequencyLimits, Wavelet, WaveletParams};
use thiserror::Error;

use crate::{Settings, WaveletPreset};

/// Smallest sample interval accepted in presets and settings, in seconds.
pub const MIN_DT: f64 = 0.0001;

/// Largest sample interval accepted in presets and settings, in seconds.
pub const MAX_DT: f64 = 0.004;

/// Most playback repetitions accepted in settings.
pub const MAX_LOOPS: usize = 1000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A wavelet parameter failed the synthesis rules.
    #[error("{0}")]
    InvalidParameter(String),

    /// A frequency lies outside the bounds for the sample interval.
    #[error("{name} = {value} Hz out of range [{min}, {max}]")]
    FrequencyOutOfRange {
        /// Name of the frequency parameter.
        name: String,
        /// The offending value.
        value: f64,
        /// Lower bound in Hz.
        min: f64,
        /// Upper bound in Hz.
        max: f64,
    },

    /// Sample interval outside `[MIN_DT, MAX_DT]`.
    #[error("dt = {dt} s out of range [{min}, {max}]", min = MIN_DT, max = MAX_DT)]
    DtOutOfRange {
        /// The offending sample interval.
        dt: f64,
    },

    /// WAV bit depth other than 16, 24, or 32.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Playback repetitions above `MAX_LOOPS`.
    #[error("loops = {0} exceeds the maximum of {max}", max = MAX_LOOPS)]
    TooManyLoops(usize),

    /// Preset name that cannot be used as a file name in the presets directory.
    #[error("invalid preset name '{0}': use letters, digits, '-', '_', '.' or spaces")]
    InvalidPresetName(String),

    /// Sample ceiling of zero.
    #[error("max_samples must be at least 1")]
    ZeroMaxSamples,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

impl From<seiswave_core::WaveletError> for ValidationError {
    fn from(err: seiswave_core::WaveletError) -> Self {
        ValidationError::InvalidParameter(err.to_string())
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that `dt` lies in `[MIN_DT, MAX_DT]`.
pub fn validate_dt(dt: f64) -> ValidationResult<()> {
    if (MIN_DT..=MAX_DT).contains(&dt) {
        Ok(())
    } else {
        Err(ValidationError::DtOutOfRange { dt })
    }
}

/// Validate wavelet parameters for sample interval `dt`.
///
/// `dt` itself is not range-checked here; see [`validate_dt`].
pub fn validate_params(params: &WaveletParams, dt: f64) -> ValidationResult<()> {
    let mut errors = Vec::new();
    collect_param_errors(params, dt, &mut errors);
    finish(errors)
}

/// Validate a preset's sample interval and wavelet parameters.
///
/// # Example
///
/// ```rust
/// use seiswave_config::{get_factory_preset, validate_preset};
///
/// let preset = get_factory_preset("klauder").unwrap();
/// assert!(validate_preset(&preset).is_ok());
/// ```
pub fn validate_preset(preset: &WaveletPreset) -> ValidationResult<()> {
    let mut errors = Vec::new();
    if let Err(e) = validate_dt(preset.dt) {
        errors.push(e);
    }
    collect_param_errors(&preset.wavelet, preset.dt, &mut errors);
    finish(errors)
}

/// Check that `name` maps to a single file inside the presets directory.
///
/// Accepts letters, digits, `-`, `_`, `.` and spaces, with no leading `.`
/// or surrounding whitespace. Path separators and `..` are rejected.
pub fn validate_preset_name(name: &str) -> ValidationResult<()> {
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ');
    if name.is_empty()
        || name.starts_with('.')
        || name.trim() != name
        || !name.chars().all(allowed)
    {
        return Err(ValidationError::InvalidPresetName(name.to_string()));
    }
    Ok(())
}

/// Validate user settings.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let mut errors = Vec::new();
    if let Err(e) = validate_dt(settings.default_dt) {
        errors.push(e);
    }
    if settings.max_samples == 0 {
        errors.push(ValidationError::ZeroMaxSamples);
    }
    if settings.loops > MAX_LOOPS {
        errors.push(ValidationError::TooManyLoops(settings.loops));
    }
    if !matches!(settings.bits_per_sample, 16 | 24 | 32) {
        errors.push(ValidationError::UnsupportedBitDepth(settings.bits_per_sample));
    }
    finish(errors)
}

fn collect_param_errors(params: &WaveletParams, dt: f64, errors: &mut Vec<ValidationError>) {
    if let Err(e) = params.validate() {
        errors.push(e.into());
    }

    // Without a usable dt there are no bounds to check against.
    let Ok(limits) = FrequencyLimits::for_dt(dt) else {
        return;
    };
    for (name, value) in params.frequencies() {
        if !limits.contains(value) {
            errors.push(ValidationError::FrequencyOutOfRange {
                name: name.to_string(),
                value,
                min: limits.min,
                max: limits.max,
            });
        }
    }
}

fn finish(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
