//! Factory presets bundled with seiswave.
//!
//! One preset per wavelet family, always available without external files.

use crate::WaveletPreset;

/// Names of the factory presets.
pub static FACTORY_PRESET_NAMES: &[&str] = &["ricker", "ormsby", "klauder", "berlage"];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("ricker", RICKER_PRESET),
    ("ormsby", ORMSBY_PRESET),
    ("klauder", KLAUDER_PRESET),
    ("berlage", BERLAGE_PRESET),
];

const RICKER_PRESET: &str = r#"
name = "Ricker"
description = "Mexican hat, 60 Hz peak frequency"
dt = 0.001

[wavelet]
type = "ricker"
frequency = 60.0
duration = 0.5
"#;

const ORMSBY_PRESET: &str = r#"
name = "Ormsby"
description = "Trapezoidal band-pass, 30-40-90-100 Hz"
dt = 0.001

[wavelet]
type = "ormsby"
f1 = 30.0
f2 = 40.0
f3 = 90.0
f4 = 100.0
duration = 0.5
"#;

const KLAUDER_PRESET: &str = r#"
name = "Klauder"
description = "Autocorrelation of a 40-90 Hz linear sweep"
dt = 0.001

[wavelet]
type = "klauder"
f1 = 40.0
f2 = 90.0
duration = 0.5
"#;

const BERLAGE_PRESET: &str = r#"
name = "Berlage"
description = "Causal 60 Hz onset, n = 2, alpha = 180"
dt = 0.001

[wavelet]
type = "berlage"
frequency = 60.0
duration = 0.5
exponent = 2.0
decay = 180.0
phase = 0.0
"#;

/// All factory presets, parsed.
///
/// A preset whose embedded TOML fails to parse is skipped with a warning.
pub fn factory_presets() -> Vec<WaveletPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(name, toml)| match WaveletPreset::from_toml(toml) {
            Ok(preset) => Some(preset),
            Err(e) => {
                tracing::warn!(preset = *name, error = %e, "skipping factory preset");
                None
            }
        })
        .collect()
}

/// Look up a factory preset by name (case-insensitive).
pub fn get_factory_preset(name: &str) -> Option<WaveletPreset> {
    let name = name.trim();
    FACTORY_PRESETS_TOML
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .and_then(|(_, toml)| WaveletPreset::from_toml(toml).ok())
}

/// Names of all factory presets.
pub fn factory_preset_names() -> &'static [&'static str] {
    FACTORY_PRESET_NAMES
}

/// Whether `name` refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name.trim()))
}
