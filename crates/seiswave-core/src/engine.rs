//! The synthesis entry point.
//!
//! [`WaveletEngine`] holds nothing but the per-call sample ceiling. The
//! sample interval is an argument to every call, never engine state, so one
//! engine can serve any number of concurrent requests at different `dt`.
//!
//! # Example
//!
//! ```rust
//! use seiswave_core::{WaveletEngine, WaveletParams, RickerParams};
//!
//! let engine = WaveletEngine::new();
//! let result = engine
//!     .generate(&WaveletParams::Ricker(RickerParams::new(60.0, 0.5)), 0.001)
//!     .unwrap();
//!
//! assert_eq!(result.len(), 501);
//! assert_eq!(result.amplitudes()[250], 1.0);
//! ```

use crate::error::Result;
use crate::wavelet::{Wavelet, WaveletParams, WaveletResult};

/// Default ceiling on samples per synthesis (10 million).
pub const DEFAULT_MAX_SAMPLES: usize = 10_000_000;

/// Stateless wavelet generator with a configurable sample ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveletEngine {
    max_samples: usize,
}

impl Default for WaveletEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveletEngine {
    /// Engine with [`DEFAULT_MAX_SAMPLES`].
    pub const fn new() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }

    /// Engine rejecting any request for more than `max_samples` samples.
    pub const fn with_max_samples(max_samples: usize) -> Self {
        Self { max_samples }
    }

    /// Current sample ceiling.
    pub const fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Synthesize `params` at sample interval `dt` seconds.
    ///
    /// Frequencies above Nyquist are allowed (the result is aliased) and
    /// only logged.
    pub fn generate(&self, params: &WaveletParams, dt: f64) -> Result<WaveletResult> {
        #[cfg(feature = "tracing")]
        {
            let nyquist = crate::math::nyquist(dt);
            let max_frequency = params.max_frequency();
            if dt > 0.0 && max_frequency > nyquist {
                tracing::warn!(
                    kind = %params.kind(),
                    max_frequency,
                    nyquist,
                    "wavelet frequency above Nyquist; output will alias"
                );
            }
        }

        let result = params.synthesize(dt, self.max_samples);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(r) => {
                tracing::debug!(kind = %r.kind(), samples = r.len(), dt, "wavelet synthesized")
            }
            Err(e) => tracing::debug!(kind = %params.kind(), dt, error = %e, "wavelet rejected"),
        }

        result
    }
}

/// Synthesize with the default engine.
pub fn generate(params: &WaveletParams, dt: f64) -> Result<WaveletResult> {
    WaveletEngine::new().generate(params, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KlauderParams, OrmsbyParams, RickerParams, WaveletError};

    #[test]
    fn default_ceiling() {
        assert_eq!(WaveletEngine::default().max_samples(), DEFAULT_MAX_SAMPLES);
    }

    #[test]
    fn ceiling_is_enforced() {
        let engine = WaveletEngine::with_max_samples(100);
        let params = WaveletParams::Ricker(RickerParams::new(60.0, 0.5));
        let err = engine.generate(&params, 0.001).unwrap_err();
        assert!(matches!(err, WaveletError::InvalidParameter(_)));
        assert!(engine.generate(&params, 0.01).is_ok());
    }

    #[test]
    fn rejects_bad_dt() {
        let params = WaveletParams::Klauder(KlauderParams::new(40.0, 90.0, 0.5));
        assert!(generate(&params, 0.0).is_err());
        assert!(generate(&params, -0.001).is_err());
        assert!(generate(&params, 1.0).is_err());
    }

    #[test]
    fn misordered_ormsby_is_rejected() {
        let params = WaveletParams::Ormsby(OrmsbyParams::new([50.0, 30.0, 90.0, 100.0], 0.5));
        assert!(generate(&params, 0.001).is_err());
    }

    #[test]
    fn above_nyquist_still_generates() {
        let params = WaveletParams::Ricker(RickerParams::new(400.0, 0.5));
        assert!(generate(&params, 0.004).is_ok());
    }
}
