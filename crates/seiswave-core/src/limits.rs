//! Frequency bounds for parameter entry.
//!
//! One policy, derived from `dt` alone: frequencies may range from
//! [`MIN_FREQUENCY_HZ`] up to [`MAX_NYQUIST_FRACTION`] of Nyquist. The
//! bounds are advisory for front ends and preset validation; synthesis
//! itself accepts any positive frequency.

use crate::error::{Result, ensure_positive};
use crate::math::nyquist;

/// Lowest frequency offered to users, in Hz.
pub const MIN_FREQUENCY_HZ: f64 = 0.1;

/// Highest frequency offered to users, as a fraction of Nyquist.
pub const MAX_NYQUIST_FRACTION: f64 = 0.9;

/// Frequency bounds for a sample interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyLimits {
    /// Lower bound in Hz.
    pub min: f64,
    /// Upper bound in Hz.
    pub max: f64,
    /// Nyquist frequency `1 / (2 dt)` in Hz.
    pub nyquist: f64,
}

impl FrequencyLimits {
    /// Bounds for sample interval `dt` seconds.
    ///
    /// ```rust
    /// use seiswave_core::FrequencyLimits;
    ///
    /// let limits = FrequencyLimits::for_dt(0.001).unwrap();
    /// assert_eq!(limits.nyquist, 500.0);
    /// assert_eq!(limits.min, 0.1);
    /// assert_eq!(limits.max, 450.0);
    /// ```
    pub fn for_dt(dt: f64) -> Result<Self> {
        ensure_positive("dt", dt)?;
        let nyquist = nyquist(dt);
        Ok(Self {
            min: MIN_FREQUENCY_HZ,
            max: nyquist * MAX_NYQUIST_FRACTION,
            nyquist,
        })
    }

    /// Whether `frequency` lies within `[min, max]`.
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.min && frequency <= self.max
    }

    /// Clamp `frequency` into `[min, max]`.
    pub fn clamp(&self, frequency: f64) -> f64 {
        frequency.clamp(self.min, self.max.max(self.min))
    }
}
