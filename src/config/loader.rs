use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Key reserved for quitting; the button shortcuts may not use it.
pub const QUIT_KEY: char = 'q';

const MAX_POLL_INTERVAL_MS: u64 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Path of the default config file: `<config_dir>/counter-app/config.toml`.
    ///
    /// Falls back to the current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("counter-app").join("config.toml")
    }

    /// Load the default config file, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate an explicit config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - poll interval is within 1..=10000 ms
    /// - increment and reset keys differ
    /// - neither key is the quit key or whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval = self.ui.poll_interval_ms;
        if interval == 0 || interval > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.poll_interval_ms must be between 1 and {}, got {}",
                    MAX_POLL_INTERVAL_MS, interval
                ),
            });
        }

        let keys = self.keys;
        if keys.increment.eq_ignore_ascii_case(&keys.reset) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "keys.increment and keys.reset must differ (both '{}')",
                    keys.increment
                ),
            });
        }

        for (name, key) in [("increment", keys.increment), ("reset", keys.reset)] {
            if key.eq_ignore_ascii_case(&QUIT_KEY) {
                return Err(ConfigError::ValidationError {
                    message: format!("keys.{} may not be '{}', it is reserved for quit", name, QUIT_KEY),
                });
            }
            if key.is_whitespace() || key.is_control() {
                return Err(ConfigError::ValidationError {
                    message: format!("keys.{} must be a printable character", name),
                });
            }
        }

        Ok(())
    }
}
