//! Klauder wavelet: autocorrelation of a linear sweep.
//!
//! For a sweep from `f1` to `f2` over `T` seconds, with rate `k = (f2 - f1) / T`
//! and centre frequency `f0 = (f1 + f2) / 2`:
//!
//! ```text
//! A(t) = sin(π k t (T − |t|)) / (π k t) · cos(2π f0 t)   t ≠ 0
//! A(0) = T
//! ```
//!
//! The `|t|` keeps the triangular correlation window even, so the output is
//! symmetric about zero. Swapping `f1` and `f2` flips the sign of `k`, which
//! cancels between numerator and denominator.

use alloc::format;
use core::f64::consts::PI;
use libm::{cos, fabs, sin};

use crate::error::{Result, WaveletError, ensure_positive};
use crate::kind::WaveletKind;
use crate::time_axis::TimeAxis;
use crate::wavelet::Wavelet;

/// Klauder wavelet parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KlauderParams {
    /// Sweep start frequency in Hz.
    pub f1: f64,
    /// Sweep end frequency in Hz.
    pub f2: f64,
    /// Sweep length `T` and span of the centered axis, in seconds.
    #[cfg_attr(feature = "serde", serde(alias = "length"))]
    pub duration: f64,
}

impl KlauderParams {
    /// Create Klauder parameters.
    pub fn new(f1: f64, f2: f64, duration: f64) -> Self {
        Self { f1, f2, duration }
    }

    /// Sweep rate `k` in Hz/s. Negative for down-sweeps.
    pub fn sweep_rate(&self) -> f64 {
        (self.f2 - self.f1) / self.duration
    }

    /// Centre frequency `f0` in Hz.
    pub fn center_frequency(&self) -> f64 {
        (self.f1 + self.f2) / 2.0
    }
}

impl Wavelet for KlauderParams {
    fn kind(&self) -> WaveletKind {
        WaveletKind::Klauder
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("f1", self.f1)?;
        ensure_positive("f2", self.f2)?;
        if self.f1 == self.f2 {
            return Err(WaveletError::invalid(format!(
                "Klauder sweep is degenerate: f1 and f2 are both {} Hz",
                self.f1
            )));
        }
        ensure_positive("duration", self.duration)
    }

    fn time_axis(&self, dt: f64, max_samples: usize) -> Result<TimeAxis> {
        TimeAxis::centered(self.duration, dt, max_samples)
    }

    fn amplitude_at(&self, t: f64) -> f64 {
        let big_t = self.duration;
        let carrier = cos(2.0 * PI * self.center_frequency() * t);
        let x = PI * self.sweep_rate() * t;
        if x == 0.0 {
            // sin(x (T - |t|)) / x -> T - |t| as x -> 0
            return (big_t - fabs(t)) * carrier;
        }
        sin(x * (big_t - fabs(t))) / x * carrier
    }

    fn max_frequency(&self) -> f64 {
        self.f1.max(self.f2)
    }
}
