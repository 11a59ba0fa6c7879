//! Presets, settings, and validation for seiswave.
//!
//! # Features
//!
//! - **Presets**: named wavelet configurations stored as TOML files
//! - **Factory Presets**: one built-in preset per wavelet family
//! - **Settings**: user defaults for the engine and renderer
//! - **Validation**: parameter checks plus sample-interval frequency bounds
//! - **Paths**: platform-specific preset and config directories
//!
//! # Example
//!
//! ```rust,no_run
//! use seiswave_config::{WaveletPreset, user_presets_dir, validate_preset};
//! use seiswave_core::{OrmsbyParams, WaveletParams};
//!
//! let preset = WaveletPreset::new(
//!     "Marine band-pass",
//!     WaveletParams::Ormsby(OrmsbyParams::new([5.0, 10.0, 60.0, 80.0], 0.4)),
//! )
//! .with_dt(0.002);
//! validate_preset(&preset).unwrap();
//!
//! let path = user_presets_dir().join("marine.toml");
//! preset.save(&path).unwrap();
//! ```

mod error;
mod preset;
mod settings;

/// Platform-specific paths for presets and configuration.
#[cfg(feature = "std")]
pub mod paths;

/// Preset and settings validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
#[cfg(feature = "std")]
pub use paths::{
    ensure_user_config_dir, ensure_user_presets_dir, find_preset, list_user_presets,
    preset_name_from_path, settings_path, user_config_dir, user_presets_dir,
};
pub use preset::{DEFAULT_DT, WaveletPreset};
pub use settings::Settings;
pub use validation::{
    MAX_DT, MAX_LOOPS, MIN_DT, ValidationError, ValidationResult, validate_dt, validate_params,
    validate_preset, validate_preset_name, validate_settings,
};
