//! Time-axis discretization.
//!
//! Every wavelet is evaluated on a uniform grid of sample times spaced by
//! `dt`. Two layouts exist:
//!
//! | Layout | Span | Sample count |
//! |--------|------|--------------|
//! | [`TimeAxis::centered`] | `[-duration/2, +duration/2]` | `2 * floor(duration / (2 dt)) + 1` |
//! | [`TimeAxis::causal`] | `[0, duration]` | `floor(duration / dt) + 1` |
//!
//! The centered count is always odd, so there is an exact sample at `t = 0`.
//! Times are computed as `(i - offset) * dt` with an integer offset, which
//! makes the centered grid exactly antisymmetric: `times[i] == -times[N-1-i]`.

use alloc::format;
use alloc::vec::Vec;
use libm::floor;

use crate::error::{Result, WaveletError, ensure_positive};

/// Relative slack applied before flooring sample counts.
///
/// Ratios such as `duration / dt` that are integral on paper can land one
/// ulp below the integer in binary floating point; without the slack the
/// axis would lose its end samples.
const COUNT_SLACK: f64 = 1e-9;

/// A uniform grid of sample times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    dt: f64,
    len: usize,
    /// Index of the `t = 0` sample.
    offset: usize,
}

impl TimeAxis {
    /// Symmetric axis centered on zero spanning `duration` seconds.
    ///
    /// Fails when `dt` or `duration` is not a finite positive number, when
    /// `duration < dt`, or when the sample count would exceed `max_samples`.
    ///
    /// # Example
    /// ```rust
    /// use seiswave_core::TimeAxis;
    ///
    /// let axis = TimeAxis::centered(0.5, 0.001, 10_000).unwrap();
    /// assert_eq!(axis.len(), 501);
    /// assert_eq!(axis.time(250), 0.0);
    /// assert!((axis.start() + 0.25).abs() < 1e-12);
    /// ```
    pub fn centered(duration: f64, dt: f64, max_samples: usize) -> Result<Self> {
        check_span(duration, dt)?;
        let half = floor(duration / (2.0 * dt) * (1.0 + COUNT_SLACK));
        let count = 2.0 * half + 1.0;
        check_count(count, max_samples)?;
        let half = half as usize;
        Ok(Self {
            dt,
            len: 2 * half + 1,
            offset: half,
        })
    }

    /// One-sided axis running from `0` to `duration` seconds.
    ///
    /// Same failure conditions as [`centered`](Self::centered).
    pub fn causal(duration: f64, dt: f64, max_samples: usize) -> Result<Self> {
        check_span(duration, dt)?;
        let steps = floor(duration / dt * (1.0 + COUNT_SLACK));
        let count = steps + 1.0;
        check_count(count, max_samples)?;
        Ok(Self {
            dt,
            len: steps as usize + 1,
            offset: 0,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a valid axis holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Whether the axis is symmetric about zero.
    pub fn is_centered(&self) -> bool {
        self.offset > 0 || self.len == 1
    }

    /// Index of the `t = 0` sample.
    pub fn zero_index(&self) -> usize {
        self.offset
    }

    /// Time of sample `index` in seconds.
    #[inline]
    pub fn time(&self, index: usize) -> f64 {
        (index as f64 - self.offset as f64) * self.dt
    }

    /// First sample time.
    pub fn start(&self) -> f64 {
        self.time(0)
    }

    /// Last sample time.
    pub fn end(&self) -> f64 {
        self.time(self.len - 1)
    }

    /// Iterate over sample times in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.time(i))
    }

    /// Collect the sample times.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

fn check_span(duration: f64, dt: f64) -> Result<()> {
    ensure_positive("dt", dt)?;
    ensure_positive("duration", duration)?;
    if duration < dt {
        return Err(WaveletError::invalid(format!(
            "duration ({duration} s) must be at least one sample interval dt ({dt} s)"
        )));
    }
    Ok(())
}

fn check_count(count: f64, max_samples: usize) -> Result<()> {
    if count > max_samples as f64 {
        return Err(WaveletError::invalid(format!(
            "requested {count} samples exceeds the limit of {max_samples}; \
             increase dt or shorten the duration"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 10_000_000;

    #[test]
    fn centered_count_is_odd_with_exact_zero() {
        for (duration, dt) in [(0.5, 0.001), (0.5, 0.002), (1.0, 0.004), (0.1234, 0.0003)] {
            let axis = TimeAxis::centered(duration, dt, LIMIT).unwrap();
            assert_eq!(axis.len() % 2, 1, "duration={duration} dt={dt}");
            assert_eq!(axis.time(axis.zero_index()), 0.0);
        }
    }

    #[test]
    fn centered_exact_ratio_keeps_end_samples() {
        let axis = TimeAxis::centered(0.5, 0.002, LIMIT).unwrap();
        assert_eq!(axis.len(), 251);
        assert!((axis.end() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn centered_is_antisymmetric() {
        let axis = TimeAxis::centered(0.3, 0.0007, LIMIT).unwrap();
        let n = axis.len();
        for i in 0..n {
            assert_eq!(axis.time(i), -axis.time(n - 1 - i));
        }
    }

    #[test]
    fn duration_equal_to_dt_gives_single_center_sample() {
        let axis = TimeAxis::centered(0.001, 0.001, LIMIT).unwrap();
        assert_eq!(axis.len(), 1);
        assert_eq!(axis.time(0), 0.0);
    }

    #[test]
    fn causal_runs_from_zero_to_duration() {
        let axis = TimeAxis::causal(0.5, 0.001, LIMIT).unwrap();
        assert_eq!(axis.len(), 501);
        assert_eq!(axis.start(), 0.0);
        assert!((axis.end() - 0.5).abs() < 1e-12);
        assert!(!axis.is_centered());
    }

    #[test]
    fn rejects_bad_spans() {
        assert!(TimeAxis::centered(0.5, 0.0, LIMIT).is_err());
        assert!(TimeAxis::centered(0.5, -0.001, LIMIT).is_err());
        assert!(TimeAxis::centered(0.0, 0.001, LIMIT).is_err());
        assert!(TimeAxis::centered(0.0005, 0.001, LIMIT).is_err());
        assert!(TimeAxis::causal(f64::NAN, 0.001, LIMIT).is_err());
    }

    #[test]
    fn rejects_sample_counts_over_limit() {
        let err = TimeAxis::centered(1000.0, 1e-6, LIMIT).unwrap_err();
        assert!(err.message().contains("exceeds the limit"));
        assert!(TimeAxis::causal(1.0, 0.001, 1000).is_err());
        assert!(TimeAxis::causal(1.0, 0.001, 1001).is_ok());
    }
}
