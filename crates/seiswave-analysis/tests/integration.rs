//! Integration tests for seiswave-analysis.
//!
//! Spectra and normalization are exercised on real wavelets from every
//! family rather than synthetic test tones.

use proptest::prelude::*;
use seiswave_analysis::{magnitude_spectrum, normalize, peak};
use seiswave_core::{WaveletKind, WaveletParams, generate};

// ---------------------------------------------------------------------------
// Spectrum layout
// ---------------------------------------------------------------------------

#[test]
fn spectrum_layout_for_every_family() {
    for kind in WaveletKind::ALL {
        for dt in [0.0005, 0.001, 0.002] {
            let wavelet = generate(&WaveletParams::defaults(kind), dt).unwrap();
            let spectrum = magnitude_spectrum(&wavelet);
            let n = wavelet.len();

            assert_eq!(spectrum.len(), n / 2 + 1, "{kind} dt={dt}");
            assert_eq!(spectrum.frequencies()[0], 0.0);
            assert!((spectrum.bin_width() - 1.0 / (n as f64 * dt)).abs() < 1e-9);
            for pair in spectrum.frequencies().windows(2) {
                assert!(pair[1] > pair[0]);
            }
            assert!(*spectrum.frequencies().last().unwrap() <= wavelet.nyquist() + 1e-9);
            let mags = spectrum.magnitudes();
            assert!(mags.iter().all(|m| m.is_finite() && *m >= 0.0));
        }
    }
}

#[test]
fn spectrum_energy_matches_time_energy() {
    let causal = generate(&WaveletParams::defaults(WaveletKind::Berlage), 0.001).unwrap();
    let energy_time: f64 = causal.amplitudes().iter().map(|a| a * a).sum();
    let spectrum = magnitude_spectrum(&causal);
    let n = causal.len();
    let mags = spectrum.magnitudes();
    // Odd N: every bin except DC appears twice in the full spectrum.
    let energy_freq = (mags[0] * mags[0]
        + 2.0 * mags[1..].iter().map(|m| m * m).sum::<f64>())
        / n as f64;
    assert!((energy_time - energy_freq).abs() <= 1e-9 * energy_time.max(1e-30));
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalized_wavelets_touch_unit_peak() {
    for kind in WaveletKind::ALL {
        let wavelet = generate(&WaveletParams::defaults(kind), 0.001).unwrap();
        let audio = normalize(wavelet.amplitudes());
        assert_eq!(peak(&audio), 1.0, "{kind}");
        assert!(audio.iter().all(|a| (-1.0..=1.0).contains(a)));
    }
}

proptest! {
    /// Normalizing any non-silent signal lands in [-1, 1] with a sample at ±1.
    #[test]
    fn normalize_bounds(signal in prop::collection::vec(-1.0e6f64..1.0e6, 1..256)) {
        let out = normalize(&signal);
        prop_assert_eq!(out.len(), signal.len());
        prop_assert!(out.iter().all(|a| (-1.0..=1.0).contains(a)));
        if signal.iter().any(|&a| a != 0.0) {
            prop_assert!(out.iter().any(|a| a.abs() == 1.0));
        } else {
            prop_assert_eq!(out, signal);
        }
    }
}
