//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Preset not found
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// Validation errors
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock")
    }

    #[test]
    fn constructors_keep_path_and_source() {
        let err = ConfigError::read_file("/presets/ricker.toml", mock_io_err());
        let ConfigError::ReadFile { ref path, .. } = err else {
            panic!("expected ReadFile, got {err:?}");
        };
        assert_eq!(path, std::path::Path::new("/presets/ricker.toml"));
        assert!(err.source().is_some());

        let err = ConfigError::write_file("/out.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.starts_with("failed to write file '/out.toml'"), "{msg}");

        let err = ConfigError::create_dir("/presets", mock_io_err());
        assert!(err.to_string().contains("failed to create directory"));
        assert!(err.source().is_some());
    }

    #[test]
    fn preset_not_found_display() {
        let err = ConfigError::PresetNotFound("vibroseis".to_string());
        assert_eq!(err.to_string(), "preset not found: vibroseis");
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_wraps() {
        let err: ConfigError = ValidationError::DtOutOfRange { dt: 0.01 }.into();
        let msg = err.to_string();
        assert!(msg.starts_with("validation failed: dt = 0.01 s"), "{msg}");
    }

    #[test]
    fn toml_errors_convert() {
        let parse = toml::from_str::<toml::Table>("name = ").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("failed to parse TOML"));
    }
}
