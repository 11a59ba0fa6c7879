//! User settings.

use seiswave_core::{DEFAULT_MAX_SAMPLES, WaveletEngine};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::preset::DEFAULT_DT;

/// Defaults for synthesis and rendering, stored as `settings.toml` in the
/// user config directory. Missing keys take their default values.
///
/// ```toml
/// max_samples = 10000000
/// default_dt = 0.001
/// loops = 4
/// bits_per_sample = 24
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Sample ceiling for one wavelet.
    pub max_samples: usize,
    /// Sample interval used when none is given, in seconds.
    pub default_dt: f64,
    /// Playback repetitions when rendering audio.
    pub loops: usize,
    /// WAV bit depth: 16, 24, or 32.
    pub bits_per_sample: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            default_dt: DEFAULT_DT,
            loops: 1,
            bits_per_sample: 16,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load settings from `path`, or the defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from the user config directory.
    #[cfg(feature = "std")]
    pub fn load_user() -> Result<Self, ConfigError> {
        Self::load_or_default(crate::paths::settings_path())
    }

    /// Save settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Synthesis engine honoring the sample ceiling.
    pub fn engine(&self) -> WaveletEngine {
        WaveletEngine::with_max_samples(self.max_samples)
    }
}
