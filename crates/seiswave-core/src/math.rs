//! Numeric helpers shared by the generators.
//!
//! All functions are allocation-free and go through `libm` so the crate
//! builds without `std`.

use core::f64::consts::PI;
use libm::sin;

/// Normalized sinc: `sin(πx) / (πx)`, with the removable singularity at
/// `x = 0` defined as 1.
///
/// # Example
/// ```rust
/// use seiswave_core::math::sinc;
///
/// assert_eq!(sinc(0.0), 1.0);
/// assert!(sinc(1.0).abs() < 1e-15);
/// assert!((sinc(0.5) - 2.0 / core::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        sin(px) / px
    }
}

/// Nyquist frequency in Hz for sample interval `dt` (seconds).
#[inline]
pub fn nyquist(dt: f64) -> f64 {
    1.0 / (2.0 * dt)
}

/// Audio sample rate implied by sample interval `dt`: `round(1/dt)`.
#[inline]
pub fn sample_rate(dt: f64) -> f64 {
    libm::round(1.0 / dt)
}
