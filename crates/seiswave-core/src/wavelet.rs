//! The [`Wavelet`] trait, the [`WaveletParams`] tagged union, and the
//! [`WaveletResult`] every generator produces.

use alloc::format;
use alloc::vec::Vec;
use libm::fabs;

use crate::berlage::BerlageParams;
use crate::error::{Result, WaveletError};
use crate::kind::WaveletKind;
use crate::klauder::KlauderParams;
use crate::math;
use crate::ormsby::OrmsbyParams;
use crate::ricker::RickerParams;
use crate::time_axis::TimeAxis;

/// A parametric wavelet family.
///
/// Implementors supply validation, the axis layout, and the closed-form
/// amplitude; [`synthesize`](Self::synthesize) ties them together. All
/// methods take `&self` and touch no shared state, so any number of
/// syntheses may run concurrently.
pub trait Wavelet {
    /// Family of this parameter set.
    fn kind(&self) -> WaveletKind;

    /// Check every parameter that does not depend on `dt`.
    fn validate(&self) -> Result<()>;

    /// Sample grid for this wavelet at interval `dt`.
    fn time_axis(&self, dt: f64, max_samples: usize) -> Result<TimeAxis>;

    /// Closed-form amplitude at time `t` (seconds).
    ///
    /// Only meaningful for validated parameters.
    fn amplitude_at(&self, t: f64) -> f64;

    /// Highest frequency the parameters ask for, in Hz.
    fn max_frequency(&self) -> f64;

    /// Validate, discretize, and evaluate.
    ///
    /// Either every amplitude is finite and the full result is returned, or
    /// the call fails without producing output.
    fn synthesize(&self, dt: f64, max_samples: usize) -> Result<WaveletResult> {
        self.validate()?;
        let axis = self.time_axis(dt, max_samples)?;
        let times = axis.to_vec();
        let amplitudes: Vec<f64> = times.iter().map(|&t| self.amplitude_at(t)).collect();

        if let Some(i) = amplitudes.iter().position(|a| !a.is_finite()) {
            return Err(WaveletError::invalid(format!(
                "{} parameters produce a non-finite amplitude at t = {} s",
                self.kind(),
                times[i]
            )));
        }

        Ok(WaveletResult {
            kind: self.kind(),
            dt,
            times,
            amplitudes,
        })
    }
}

/// Parameters for one of the four wavelet families.
///
/// With the `serde` feature this is an internally tagged enum keyed by
/// `type`:
///
/// ```toml
/// type = "ormsby"
/// f1 = 5.0
/// f2 = 10.0
/// f3 = 40.0
/// f4 = 45.0
/// duration = 0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum WaveletParams {
    /// Ricker parameters.
    Ricker(RickerParams),
    /// Ormsby parameters.
    Ormsby(OrmsbyParams),
    /// Klauder parameters.
    Klauder(KlauderParams),
    /// Berlage parameters.
    Berlage(BerlageParams),
}

impl WaveletParams {
    /// Default parameters for a family: 60 Hz Ricker/Berlage, a 30-40-90-100 Hz
    /// Ormsby, a 40→90 Hz Klauder, all half a second long.
    pub fn defaults(kind: WaveletKind) -> Self {
        match kind {
            WaveletKind::Ricker => Self::Ricker(RickerParams::new(60.0, 0.5)),
            WaveletKind::Ormsby => Self::Ormsby(OrmsbyParams::new([30.0, 40.0, 90.0, 100.0], 0.5)),
            WaveletKind::Klauder => Self::Klauder(KlauderParams::new(40.0, 90.0, 0.5)),
            WaveletKind::Berlage => Self::Berlage(BerlageParams::new(60.0, 0.5)),
        }
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        match self {
            Self::Ricker(p) => p.duration,
            Self::Ormsby(p) => p.duration,
            Self::Klauder(p) => p.duration,
            Self::Berlage(p) => p.duration,
        }
    }

    /// Every frequency parameter with its name, in declaration order.
    pub fn frequencies(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Ricker(p) => alloc::vec![("frequency", p.frequency)],
            Self::Ormsby(p) => alloc::vec![("f1", p.f1), ("f2", p.f2), ("f3", p.f3), ("f4", p.f4)],
            Self::Klauder(p) => alloc::vec![("f1", p.f1), ("f2", p.f2)],
            Self::Berlage(p) => alloc::vec![("frequency", p.frequency)],
        }
    }
}

impl Wavelet for WaveletParams {
    fn kind(&self) -> WaveletKind {
        match self {
            Self::Ricker(_) => WaveletKind::Ricker,
            Self::Ormsby(_) => WaveletKind::Ormsby,
            Self::Klauder(_) => WaveletKind::Klauder,
            Self::Berlage(_) => WaveletKind::Berlage,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Ricker(p) => p.validate(),
            Self::Ormsby(p) => p.validate(),
            Self::Klauder(p) => p.validate(),
            Self::Berlage(p) => p.validate(),
        }
    }

    fn time_axis(&self, dt: f64, max_samples: usize) -> Result<TimeAxis> {
        match self {
            Self::Ricker(p) => p.time_axis(dt, max_samples),
            Self::Ormsby(p) => p.time_axis(dt, max_samples),
            Self::Klauder(p) => p.time_axis(dt, max_samples),
            Self::Berlage(p) => p.time_axis(dt, max_samples),
        }
    }

    fn amplitude_at(&self, t: f64) -> f64 {
        match self {
            Self::Ricker(p) => p.amplitude_at(t),
            Self::Ormsby(p) => p.amplitude_at(t),
            Self::Klauder(p) => p.amplitude_at(t),
            Self::Berlage(p) => p.amplitude_at(t),
        }
    }

    fn max_frequency(&self) -> f64 {
        match self {
            Self::Ricker(p) => p.max_frequency(),
            Self::Ormsby(p) => p.max_frequency(),
            Self::Klauder(p) => p.max_frequency(),
            Self::Berlage(p) => p.max_frequency(),
        }
    }
}

impl From<RickerParams> for WaveletParams {
    fn from(p: RickerParams) -> Self {
        Self::Ricker(p)
    }
}

impl From<OrmsbyParams> for WaveletParams {
    fn from(p: OrmsbyParams) -> Self {
        Self::Ormsby(p)
    }
}

impl From<KlauderParams> for WaveletParams {
    fn from(p: KlauderParams) -> Self {
        Self::Klauder(p)
    }
}

impl From<BerlageParams> for WaveletParams {
    fn from(p: BerlageParams) -> Self {
        Self::Berlage(p)
    }
}

/// Location and value of the largest-magnitude sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index.
    pub index: usize,
    /// Sample time in seconds.
    pub time: f64,
    /// Signed amplitude at the peak.
    pub amplitude: f64,
}

/// A synthesized wavelet: amplitudes paired with their sample times.
///
/// Invariants, established by [`Wavelet::synthesize`]:
///
/// - `amplitudes.len() == times.len() >= 1`
/// - `times` is strictly increasing with constant step `dt`
/// - every amplitude is finite
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaveletResult {
    kind: WaveletKind,
    dt: f64,
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl WaveletResult {
    /// Family that produced this result.
    pub fn kind(&self) -> WaveletKind {
        self.kind
    }

    /// Sample interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Sample times in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Amplitudes, one per sample time.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// `true` only for a result with no samples, which synthesis never yields.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Audio sample rate implied by `dt`, `round(1/dt)`.
    pub fn sample_rate(&self) -> u32 {
        math::sample_rate(self.dt) as u32
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist(&self) -> f64 {
        math::nyquist(self.dt)
    }

    /// Largest-magnitude sample. The first one wins on ties.
    pub fn peak(&self) -> Option<Peak> {
        let mut best: Option<Peak> = None;
        for (index, (&time, &amplitude)) in self.times.iter().zip(&self.amplitudes).enumerate() {
            if best.is_none_or(|b| fabs(amplitude) > fabs(b.amplitude)) {
                best = Some(Peak {
                    index,
                    time,
                    amplitude,
                });
            }
        }
        best
    }

    /// Iterate over `(time, amplitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }

    /// Split into `(times, amplitudes)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.amplitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_for_every_kind() {
        for kind in WaveletKind::ALL {
            let params = WaveletParams::defaults(kind);
            assert_eq!(params.kind(), kind);
            assert!(params.validate().is_ok(), "{kind} defaults must validate");
            assert_eq!(params.duration(), 0.5);
        }
    }

    #[test]
    fn synthesize_dispatches_to_family() {
        let params = WaveletParams::defaults(WaveletKind::Klauder);
        let result = params.synthesize(0.001, 1_000_000).unwrap();
        assert_eq!(result.kind(), WaveletKind::Klauder);
        assert_eq!(result.len(), 501);
        assert_eq!(result.sample_rate(), 1000);
    }

    #[test]
    fn peak_of_ricker_is_center() {
        let result = WaveletParams::defaults(WaveletKind::Ricker)
            .synthesize(0.001, 1_000_000)
            .unwrap();
        let peak = result.peak().unwrap();
        assert_eq!(peak.index, 250);
        assert_eq!(peak.time, 0.0);
        assert_eq!(peak.amplitude, 1.0);
    }

    #[test]
    fn frequencies_lists_named_parameters() {
        let params = WaveletParams::defaults(WaveletKind::Ormsby);
        let names: Vec<&str> = params.frequencies().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["f1", "f2", "f3", "f4"]);
        assert_eq!(params.max_frequency(), 100.0);
    }

    #[test]
    fn non_finite_output_is_rejected_whole() {
        // t^n overflows long before exp(-decay * t) can pull it back.
        let berlage = BerlageParams::new(5.0, 1.0e6)
            .with_exponent(1.0e3)
            .with_decay(0.0);
        let params = WaveletParams::Berlage(berlage);
        let err = params.synthesize(1000.0, 10_000).unwrap_err();
        assert!(err.message().contains("non-finite"), "{err}");
    }
}
