//! Closed set of wavelet families.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use crate::error::WaveletError;

/// The four supported wavelet families.
///
/// Parsing is case-insensitive, so `"ricker"`, `"Ricker"` and `"RICKER"`
/// all name the same family.
///
/// ```rust
/// use seiswave_core::WaveletKind;
///
/// let kind: WaveletKind = "Ormsby".parse().unwrap();
/// assert_eq!(kind, WaveletKind::Ormsby);
/// assert!("mexican-hat".parse::<WaveletKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WaveletKind {
    /// Zero-phase Gaussian-derivative pulse.
    Ricker,
    /// Trapezoidal-spectrum band-pass pulse.
    Ormsby,
    /// Autocorrelation of a linear sweep.
    Klauder,
    /// Causal, exponentially decaying sinusoid.
    Berlage,
}

impl WaveletKind {
    /// Every family, in display order.
    pub const ALL: [WaveletKind; 4] = [
        WaveletKind::Ricker,
        WaveletKind::Ormsby,
        WaveletKind::Klauder,
        WaveletKind::Berlage,
    ];

    /// Display name (`"Ricker"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            WaveletKind::Ricker => "Ricker",
            WaveletKind::Ormsby => "Ormsby",
            WaveletKind::Klauder => "Klauder",
            WaveletKind::Berlage => "Berlage",
        }
    }

    /// Lowercase identifier used in presets and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            WaveletKind::Ricker => "ricker",
            WaveletKind::Ormsby => "ormsby",
            WaveletKind::Klauder => "klauder",
            WaveletKind::Berlage => "berlage",
        }
    }

    /// Whether the family is evaluated on a symmetric axis by default.
    pub const fn is_symmetric(self) -> bool {
        !matches!(self, WaveletKind::Berlage)
    }
}

impl fmt::Display for WaveletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveletKind {
    type Err = WaveletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WaveletKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                WaveletError::invalid(format!(
                    "unknown wavelet type '{s}' (expected Ricker, Ormsby, Klauder or Berlage)"
                ))
            })
    }
}
