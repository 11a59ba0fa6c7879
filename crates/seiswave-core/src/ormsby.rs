//! Ormsby wavelet.
//!
//! Band-pass pulse whose spectrum is a trapezoid with corners
//! `f1 < f2 < f3 < f4` (low-cut, low-pass, high-pass, high-cut):
//!
//! ```text
//! A(t) = [π f4² sinc²(f4 t) − π f3² sinc²(f3 t)] / (f4 − f3)
//!      − [π f2² sinc²(f2 t) − π f1² sinc²(f1 t)] / (f2 − f1)
//! ```
//!
//! At `t = 0` every `sinc` is 1 and the amplitude reduces to
//! `π (f3 + f4) − π (f1 + f2)`.

use alloc::format;
use core::f64::consts::PI;

use crate::error::{Result, WaveletError, ensure_positive};
use crate::kind::WaveletKind;
use crate::math::sinc;
use crate::time_axis::TimeAxis;
use crate::wavelet::Wavelet;

/// Ormsby wavelet parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrmsbyParams {
    /// Low-cut corner in Hz.
    pub f1: f64,
    /// Low-pass corner in Hz.
    pub f2: f64,
    /// High-pass corner in Hz.
    pub f3: f64,
    /// High-cut corner in Hz.
    pub f4: f64,
    /// Total span of the centered axis in seconds.
    #[cfg_attr(feature = "serde", serde(alias = "length"))]
    pub duration: f64,
}

impl OrmsbyParams {
    /// Create Ormsby parameters from the four corners `[f1, f2, f3, f4]`.
    pub fn new(corners: [f64; 4], duration: f64) -> Self {
        let [f1, f2, f3, f4] = corners;
        Self {
            f1,
            f2,
            f3,
            f4,
            duration,
        }
    }

    /// The corner frequencies as an array.
    pub fn corners(&self) -> [f64; 4] {
        [self.f1, self.f2, self.f3, self.f4]
    }

    /// Analytic value at `t = 0`.
    pub fn center_amplitude(&self) -> f64 {
        PI * (self.f3 + self.f4) - PI * (self.f1 + self.f2)
    }
}

/// One slope of the trapezoid:
/// `[π hi² sinc²(hi t) − π lo² sinc²(lo t)] / (hi − lo)`.
///
/// Numerator and denominator are both scaled by `1 / hi` so that
/// `π f²` is never formed and very large corners stay finite.
#[inline]
fn slope_term(lo: f64, hi: f64, t: f64) -> f64 {
    let s_hi = sinc(hi * t);
    let s_lo = sinc(lo * t);
    let ratio = lo / hi;
    let span = (hi - lo) / hi;
    PI * (hi * s_hi * s_hi - lo * ratio * s_lo * s_lo) / span
}

impl Wavelet for OrmsbyParams {
    fn kind(&self) -> WaveletKind {
        WaveletKind::Ormsby
    }

    fn validate(&self) -> Result<()> {
        for (name, f) in ["f1", "f2", "f3", "f4"].into_iter().zip(self.corners()) {
            ensure_positive(name, f)?;
        }
        if !(self.f1 < self.f2 && self.f2 < self.f3 && self.f3 < self.f4) {
            return Err(WaveletError::invalid(format!(
                "Ormsby corner frequencies must satisfy f1 < f2 < f3 < f4, \
                 got f1={}, f2={}, f3={}, f4={}",
                self.f1, self.f2, self.f3, self.f4
            )));
        }
        ensure_positive("duration", self.duration)
    }

    fn time_axis(&self, dt: f64, max_samples: usize) -> Result<TimeAxis> {
        TimeAxis::centered(self.duration, dt, max_samples)
    }

    fn amplitude_at(&self, t: f64) -> f64 {
        slope_term(self.f3, self.f4, t) - slope_term(self.f1, self.f2, t)
    }

    fn max_frequency(&self) -> f64 {
        self.f4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_matches_closed_form() {
        let p = OrmsbyParams::new([5.0, 10.0, 40.0, 45.0], 0.5);
        let a0 = p.amplitude_at(0.0);
        assert!(a0.is_finite());
        assert!((a0 - p.center_amplitude()).abs() < 1e-9);
        assert!((a0 - PI * 70.0).abs() < 1e-9);
    }

    #[test]
    fn even_in_time() {
        let p = OrmsbyParams::new([30.0, 40.0, 90.0, 100.0], 0.5);
        for i in 1..200 {
            let t = i as f64 * 0.00123;
            assert!((p.amplitude_at(t) - p.amplitude_at(-t)).abs() < 1e-9);
        }
    }

    #[test]
    fn huge_corners_stay_finite() {
        let p = OrmsbyParams::new([1e154, 2e154, 3e154, 4e154], 0.5);
        let a0 = p.amplitude_at(0.0);
        assert!(a0.is_finite());
        assert!((a0 / p.center_amplitude() - 1.0).abs() < 1e-12);

        let result = p.synthesize(0.001, 1_000_000).unwrap();
        assert!(result.amplitudes().iter().all(|a| a.is_finite()));
    }

    #[test]
    fn ordering_is_enforced() {
        let bad = [
            [50.0, 30.0, 90.0, 100.0],
            [30.0, 30.0, 90.0, 100.0],
            [30.0, 40.0, 100.0, 100.0],
            [30.0, 95.0, 90.0, 100.0],
            [0.0, 40.0, 90.0, 100.0],
            [-5.0, 40.0, 90.0, 100.0],
        ];
        for corners in bad {
            assert!(
                OrmsbyParams::new(corners, 0.5).validate().is_err(),
                "{corners:?} must be rejected"
            );
        }
    }

    #[test]
    fn ordering_message_names_corners() {
        let err = OrmsbyParams::new([50.0, 30.0, 90.0, 100.0], 0.5)
            .validate()
            .unwrap_err();
        assert!(err.message().contains("f1 < f2 < f3 < f4"), "{err}");
    }
}
