use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container. Every section is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keys: KeyBindings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Longest wait for input before the loop redraws, in milliseconds
    /// (default: 250).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Capture mouse clicks on the buttons (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Single-key shortcuts for the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_increment_key")]
    pub increment: char,
    #[serde(default = "default_reset_key")]
    pub reset: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `--log-level` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Logs are dropped when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_increment_key() -> char {
    '+'
}

fn default_reset_key() -> char {
    'r'
}

fn default_log_level() -> String {
    "info".to_string()
}

impl UiConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            increment: default_increment_key(),
            reset: default_reset_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
