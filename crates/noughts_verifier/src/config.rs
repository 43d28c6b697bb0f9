//! Verifier configuration.

use super::types::BOARD_SIZE;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration passed to verifier construction.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Board size handed to the validator.
    #[serde(default = "default_size")]
    size: usize,
}

#[instrument]
fn default_size() -> usize {
    BOARD_SIZE
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

impl VerifierConfig {
    /// Creates a configuration with the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or falls back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_size() {
        assert_eq!(*VerifierConfig::default().size(), 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "size = 4").expect("write config");
        let config = VerifierConfig::from_file(file.path()).expect("config parses");
        assert_eq!(*config.size(), 4);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let config = VerifierConfig::from_file(file.path()).expect("config parses");
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "size = \"three\"").expect("write config");
        let err = VerifierConfig::from_file(file.path()).expect_err("size must be an integer");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::load_or_default(dir.path().join("noughts.toml"))
            .expect("defaults");
        assert_eq!(config, VerifierConfig::default());
    }
}
