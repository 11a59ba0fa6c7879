//! Ricker wavelet.
//!
//! `A(t) = (1 - 2 (π f t)²) · exp(-(π f t)²)`
//!
//! Zero-phase and exactly symmetric: the amplitude depends on `t²` only and
//! the centered axis is exactly antisymmetric. Peak value 1 at `t = 0`, zero
//! crossings at `t = ±1 / (π f √2)`.

use core::f64::consts::PI;
use libm::exp;

use crate::error::{Result, ensure_positive};
use crate::kind::WaveletKind;
use crate::time_axis::TimeAxis;
use crate::wavelet::Wavelet;

/// Past this value of `(π f t)²` the envelope underflows to zero.
const UNDERFLOW_X2: f64 = 745.0;

/// Ricker wavelet parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RickerParams {
    /// Peak frequency in Hz.
    pub frequency: f64,
    /// Total span of the centered axis in seconds.
    #[cfg_attr(feature = "serde", serde(alias = "length"))]
    pub duration: f64,
}

impl RickerParams {
    /// Create Ricker parameters.
    pub fn new(frequency: f64, duration: f64) -> Self {
        Self {
            frequency,
            duration,
        }
    }
}

impl Wavelet for RickerParams {
    fn kind(&self) -> WaveletKind {
        WaveletKind::Ricker
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("frequency", self.frequency)?;
        ensure_positive("duration", self.duration)
    }

    fn time_axis(&self, dt: f64, max_samples: usize) -> Result<TimeAxis> {
        TimeAxis::centered(self.duration, dt, max_samples)
    }

    #[inline]
    fn amplitude_at(&self, t: f64) -> f64 {
        let x = PI * self.frequency * t;
        let x2 = x * x;
        if !(x2 <= UNDERFLOW_X2) {
            return 0.0;
        }
        (1.0 - 2.0 * x2) * exp(-x2)
    }

    fn max_frequency(&self) -> f64 {
        self.frequency
    }
}
