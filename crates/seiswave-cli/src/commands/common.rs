//! Shared CLI helpers used across multiple commands.

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use seiswave_config::{
    Settings, ValidationError, WaveletPreset, find_preset, get_factory_preset, validate_params,
    validate_settings,
};
use seiswave_core::{Wavelet, WaveletKind, WaveletParams};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for numeric results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable columns
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON document
    Json,
}

/// Wavelet selection and parameter overrides shared by every command that
/// synthesizes a wavelet.
#[derive(Args, Debug, Default, Clone)]
pub struct WaveletArgs {
    /// Wavelet family: ricker, ormsby, klauder, or berlage
    #[arg(value_name = "KIND")]
    pub kind: Option<WaveletKind>,

    /// Start from a preset (factory name, user preset name, or TOML path)
    #[arg(long)]
    pub preset: Option<String>,

    /// Peak/carrier frequency in Hz (ricker, berlage)
    #[arg(long)]
    pub frequency: Option<f64>,

    /// First corner (ormsby) or start (klauder) frequency in Hz
    #[arg(long)]
    pub f1: Option<f64>,

    /// Second corner (ormsby) or end (klauder) frequency in Hz
    #[arg(long)]
    pub f2: Option<f64>,

    /// Third corner frequency in Hz (ormsby)
    #[arg(long)]
    pub f3: Option<f64>,

    /// Fourth corner frequency in Hz (ormsby)
    #[arg(long)]
    pub f4: Option<f64>,

    /// Wavelet duration in seconds
    #[arg(long, visible_alias = "length")]
    pub duration: Option<f64>,

    /// Sample interval in seconds
    #[arg(long)]
    pub dt: Option<f64>,

    /// Envelope exponent n (berlage)
    #[arg(long)]
    pub exponent: Option<f64>,

    /// Decay rate alpha in 1/s (berlage)
    #[arg(long)]
    pub decay: Option<f64>,

    /// Carrier phase in radians (berlage)
    #[arg(long, allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Evaluate on a centered axis instead of starting at t = 0 (berlage)
    #[arg(long)]
    pub centered: bool,
}

impl WaveletArgs {
    /// Resolve the base parameters (preset or family defaults) and apply
    /// every override flag. Returns the parameters and the sample interval.
    pub fn resolve(&self, settings: &Settings) -> anyhow::Result<(WaveletParams, f64)> {
        let (mut params, mut dt) = match (&self.preset, self.kind) {
            (Some(name), kind) => {
                let preset = load_preset(name)?;
                if let Some(kind) = kind
                    && kind != preset.kind()
                {
                    bail!(
                        "preset '{name}' is a {} wavelet, not {}",
                        preset.kind().id(),
                        kind.id()
                    );
                }
                (preset.wavelet, preset.dt)
            }
            (None, Some(kind)) => (WaveletParams::defaults(kind), settings.default_dt),
            (None, None) => bail!("specify a wavelet KIND or --preset NAME"),
        };

        self.apply(&mut params)?;
        if let Some(value) = self.dt {
            dt = value;
        }
        Ok((params, dt))
    }

    fn apply(&self, params: &mut WaveletParams) -> anyhow::Result<()> {
        let kind = params.kind();
        let reject = |flag: &str, given: bool| -> anyhow::Result<()> {
            if given {
                bail!("--{flag} does not apply to a {} wavelet", kind.id());
            }
            Ok(())
        };

        match params {
            WaveletParams::Ricker(p) => {
                set(&mut p.frequency, self.frequency);
                set(&mut p.duration, self.duration);
                reject("f1", self.f1.is_some())?;
                reject("f2", self.f2.is_some())?;
                reject("f3", self.f3.is_some())?;
                reject("f4", self.f4.is_some())?;
                self.reject_berlage_flags(&reject)?;
            }
            WaveletParams::Ormsby(p) => {
                set(&mut p.f1, self.f1);
                set(&mut p.f2, self.f2);
                set(&mut p.f3, self.f3);
                set(&mut p.f4, self.f4);
                set(&mut p.duration, self.duration);
                reject("frequency", self.frequency.is_some())?;
                self.reject_berlage_flags(&reject)?;
            }
            WaveletParams::Klauder(p) => {
                set(&mut p.f1, self.f1);
                set(&mut p.f2, self.f2);
                set(&mut p.duration, self.duration);
                reject("frequency", self.frequency.is_some())?;
                reject("f3", self.f3.is_some())?;
                reject("f4", self.f4.is_some())?;
                self.reject_berlage_flags(&reject)?;
            }
            WaveletParams::Berlage(p) => {
                set(&mut p.frequency, self.frequency);
                set(&mut p.duration, self.duration);
                set(&mut p.exponent, self.exponent);
                set(&mut p.decay, self.decay);
                set(&mut p.phase, self.phase);
                p.centered |= self.centered;
                reject("f1", self.f1.is_some())?;
                reject("f2", self.f2.is_some())?;
                reject("f3", self.f3.is_some())?;
                reject("f4", self.f4.is_some())?;
            }
        }
        Ok(())
    }

    fn reject_berlage_flags(
        &self,
        reject: &impl Fn(&str, bool) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        reject("exponent", self.exponent.is_some())?;
        reject("decay", self.decay.is_some())?;
        reject("phase", self.phase.is_some())?;
        reject("centered", self.centered)
    }
}

fn set(field: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *field = v;
    }
}

/// Warn about frequencies outside the advisory bounds for `dt`.
///
/// Parameter rule violations are left for synthesis to report.
pub fn warn_out_of_range(params: &WaveletParams, dt: f64) {
    let errors = match validate_params(params, dt) {
        Ok(()) => return,
        Err(ValidationError::Multiple(errors)) => errors,
        Err(e) => vec![e],
    };
    for e in errors {
        if matches!(e, ValidationError::FrequencyOutOfRange { .. }) {
            tracing::warn!("{e}");
        }
    }
}

/// Load user settings, falling back to defaults when none are saved.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = Settings::load_user().context("failed to load settings")?;
    validate_settings(&settings).context("invalid settings file")?;
    Ok(settings)
}

/// Load a preset by name or path.
///
/// Searches factory presets first, then user presets, then treats `name`
/// as a file path.
pub fn load_preset(name: &str) -> anyhow::Result<WaveletPreset> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    if let Some(path) = find_preset(name) {
        return WaveletPreset::load(&path)
            .with_context(|| format!("failed to load preset '{name}'"));
    }

    bail!("Preset '{name}' not found. Use 'seiswave presets list' to see available presets.")
}

/// Buffered writer for `--output`, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seiswave_core::{BerlageParams, OrmsbyParams, RickerParams};

    fn args(kind: WaveletKind) -> WaveletArgs {
        WaveletArgs {
            kind: Some(kind),
            ..WaveletArgs::default()
        }
    }

    #[test]
    fn defaults_use_settings_dt() {
        let settings = Settings {
            default_dt: 0.002,
            ..Settings::default()
        };
        let (params, dt) = args(WaveletKind::Ricker).resolve(&settings).unwrap();
        assert_eq!(params, WaveletParams::defaults(WaveletKind::Ricker));
        assert_eq!(dt, 0.002);
    }

    #[test]
    fn overrides_apply() {
        let a = WaveletArgs {
            f1: Some(5.0),
            f4: Some(120.0),
            duration: Some(0.3),
            dt: Some(0.0005),
            ..args(WaveletKind::Ormsby)
        };
        let (params, dt) = a.resolve(&Settings::default()).unwrap();
        assert_eq!(
            params,
            WaveletParams::Ormsby(OrmsbyParams::new([5.0, 40.0, 90.0, 120.0], 0.3))
        );
        assert_eq!(dt, 0.0005);
    }

    #[test]
    fn berlage_extras() {
        let a = WaveletArgs {
            frequency: Some(30.0),
            decay: Some(90.0),
            phase: Some(-1.0),
            centered: true,
            ..args(WaveletKind::Berlage)
        };
        let (params, _) = a.resolve(&Settings::default()).unwrap();
        assert_eq!(
            params,
            WaveletParams::Berlage(
                BerlageParams::new(30.0, 0.5)
                    .with_decay(90.0)
                    .with_phase(-1.0)
                    .with_centered(true)
            )
        );
    }

    #[test]
    fn foreign_flags_rejected() {
        let a = WaveletArgs {
            f3: Some(50.0),
            ..args(WaveletKind::Klauder)
        };
        let err = a.resolve(&Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "--f3 does not apply to a klauder wavelet");

        let a = WaveletArgs {
            exponent: Some(3.0),
            ..args(WaveletKind::Ricker)
        };
        assert!(a.resolve(&Settings::default()).is_err());
    }

    #[test]
    fn factory_preset_base() {
        let a = WaveletArgs {
            preset: Some("ricker".to_string()),
            frequency: Some(25.0),
            ..WaveletArgs::default()
        };
        let (params, dt) = a.resolve(&Settings::default()).unwrap();
        assert_eq!(params, WaveletParams::Ricker(RickerParams::new(25.0, 0.5)));
        assert_eq!(dt, 0.001);
    }

    #[test]
    fn preset_kind_mismatch() {
        let a = WaveletArgs {
            preset: Some("ricker".to_string()),
            ..args(WaveletKind::Ormsby)
        };
        assert!(a.resolve(&Settings::default()).is_err());
    }

    #[test]
    fn nothing_selected() {
        let settings = Settings::default();
        assert!(WaveletArgs::default().resolve(&settings).is_err());
    }
}
