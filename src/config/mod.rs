mod loader;
mod types;

pub use loader::{ConfigError, QUIT_KEY};
pub use types::{Config, KeyBindings, LoggingConfig, UiConfig};
