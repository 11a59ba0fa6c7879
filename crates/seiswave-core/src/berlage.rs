//! Berlage wavelet.
//!
//! Causal, polynomially enveloped, exponentially decaying sinusoid:
//!
//! ```text
//! A(t) = 0                                   t < 0
//! A(t) = tⁿ · exp(−α t) · cos(2π f t + φ)    t ≥ 0
//! ```
//!
//! By default the wavelet is evaluated on a causal axis `[0, duration]`.
//! With [`centered`](BerlageParams::centered) set it uses the symmetric axis
//! shared by the other families, and every sample before zero is exactly 0.

use core::f64::consts::PI;
use libm::{cos, exp, log};

use crate::error::{Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::kind::WaveletKind;
use crate::time_axis::TimeAxis;
use crate::wavelet::Wavelet;

/// Default envelope exponent `n`.
pub const DEFAULT_EXPONENT: f64 = 2.0;

/// Default decay rate `α` in 1/s.
pub const DEFAULT_DECAY: f64 = 180.0;

/// Default phase `φ` in radians.
pub const DEFAULT_PHASE: f64 = 0.0;

/// Berlage wavelet parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BerlageParams {
    /// Carrier frequency in Hz.
    pub frequency: f64,
    /// Length of the axis in seconds.
    #[cfg_attr(feature = "serde", serde(alias = "length"))]
    pub duration: f64,
    /// Envelope exponent `n`.
    #[cfg_attr(feature = "serde", serde(default = "default_exponent"))]
    pub exponent: f64,
    /// Decay rate `α` in 1/s.
    #[cfg_attr(feature = "serde", serde(default = "default_decay"))]
    pub decay: f64,
    /// Carrier phase `φ` in radians.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase: f64,
    /// Evaluate on `[-duration/2, duration/2]` instead of `[0, duration]`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub centered: bool,
}

#[cfg(feature = "serde")]
fn default_exponent() -> f64 {
    DEFAULT_EXPONENT
}

#[cfg(feature = "serde")]
fn default_decay() -> f64 {
    DEFAULT_DECAY
}

impl BerlageParams {
    /// Create Berlage parameters with default shape (`n = 2`, `α = 180`, `φ = 0`).
    pub fn new(frequency: f64, duration: f64) -> Self {
        Self {
            frequency,
            duration,
            exponent: DEFAULT_EXPONENT,
            decay: DEFAULT_DECAY,
            phase: DEFAULT_PHASE,
            centered: false,
        }
    }

    /// Set the envelope exponent `n`.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Set the decay rate `α`.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the phase `φ`.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Use the symmetric axis.
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// `tⁿ · exp(−α t)` for `t ≥ 0`, computed in log space so large `n`
    /// does not overflow before the decay is applied.
    fn envelope(&self, t: f64) -> f64 {
        if t == 0.0 {
            return if self.exponent == 0.0 { 1.0 } else { 0.0 };
        }
        exp(self.exponent * log(t) - self.decay * t)
    }
}

impl Wavelet for BerlageParams {
    fn kind(&self) -> WaveletKind {
        WaveletKind::Berlage
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("frequency", self.frequency)?;
        ensure_positive("duration", self.duration)?;
        ensure_non_negative("exponent", self.exponent)?;
        ensure_non_negative("decay", self.decay)?;
        ensure_finite("phase", self.phase)
    }

    fn time_axis(&self, dt: f64, max_samples: usize) -> Result<TimeAxis> {
        if self.centered {
            TimeAxis::centered(self.duration, dt, max_samples)
        } else {
            TimeAxis::causal(self.duration, dt, max_samples)
        }
    }

    fn amplitude_at(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        self.envelope(t) * cos(2.0 * PI * self.frequency * t + self.phase)
    }

    fn max_frequency(&self) -> f64 {
        self.frequency
    }
}
