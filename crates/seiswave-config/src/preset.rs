//! Preset file format and operations.

use seiswave_core::{Wavelet, WaveletEngine, WaveletKind, WaveletParams, WaveletResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Sample interval used when a preset does not name one, in seconds.
pub const DEFAULT_DT: f64 = 0.001;

/// A named wavelet configuration.
///
/// # TOML Format
///
/// ```toml
/// name = "Sweep"
/// description = "Vibroseis correlation pulse"
/// dt = 0.002
///
/// [wavelet]
/// type = "klauder"
/// f1 = 10.0
/// f2 = 80.0
/// duration = 0.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaveletPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample interval in seconds (defaults to 1 ms).
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Wavelet family and parameters.
    pub wavelet: WaveletParams,
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

impl WaveletPreset {
    /// Create a preset at the default sample interval.
    pub fn new(name: impl Into<String>, wavelet: WaveletParams) -> Self {
        Self {
            name: name.into(),
            description: None,
            dt: DEFAULT_DT,
            wavelet,
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample interval.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Wavelet family of this preset.
    pub fn kind(&self) -> WaveletKind {
        self.wavelet.kind()
    }

    /// Synthesize the preset's wavelet.
    pub fn synthesize(&self, engine: &WaveletEngine) -> seiswave_core::Result<WaveletResult> {
        engine.generate(&self.wavelet, self.dt)
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for WaveletPreset {
    fn default() -> Self {
        Self::new("Untitled", WaveletParams::defaults(WaveletKind::Ricker))
    }
}
