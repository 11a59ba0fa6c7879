//! Error type for wavelet synthesis.
//!
//! Synthesis has exactly one failure mode: a parameter that is out of range,
//! inconsistent with its siblings, or degenerate. Validation runs before any
//! sample is produced, so an error never comes with a partial result.

use alloc::format;
use alloc::string::String;

/// Errors produced by wavelet parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveletError {
    /// A parameter is out of range, mis-ordered, or degenerate.
    ///
    /// The message is meant to be shown to the user verbatim.
    InvalidParameter(String),
}

impl WaveletError {
    /// Create an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidParameter(msg) => msg,
        }
    }
}

impl core::fmt::Display for WaveletError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl core::error::Error for WaveletError {}

/// Convenience result type for synthesis operations.
pub type Result<T> = core::result::Result<T, WaveletError>;

/// Require `value` to be finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WaveletError::invalid(format!("{name} must be finite and > 0, got {value}")))
    }
}

/// Require `value` to be finite and non-negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WaveletError::invalid(format!("{name} must be finite and >= 0, got {value}")))
    }
}

/// Require `value` to be finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveletError::invalid(format!("{name} must be finite, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_prefixes_message() {
        let err = WaveletError::invalid("frequency must be finite and > 0, got 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter: frequency must be finite and > 0, got 0"
        );
        assert_eq!(err.message(), "frequency must be finite and > 0, got 0");
    }

    #[test]
    fn positive_guard() {
        assert!(ensure_positive("dt", 0.001).is_ok());
        assert!(ensure_positive("dt", 0.0).is_err());
        assert!(ensure_positive("dt", -1.0).is_err());
        assert!(ensure_positive("dt", f64::NAN).is_err());
        assert!(ensure_positive("dt", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negative_guard() {
        assert!(ensure_non_negative("decay", 0.0).is_ok());
        assert!(ensure_non_negative("decay", -0.5).is_err());
        assert!(ensure_finite("phase", -3.0).is_ok());
        assert!(ensure_finite("phase", f64::NEG_INFINITY).is_err());
    }
}
