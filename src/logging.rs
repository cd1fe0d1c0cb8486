//! Tracing setup.
//!
//! The interactive UI owns stdout, so it only logs when a file is
//! configured. Headless runs log to stderr.

use std::fs::OpenOptions;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Write to `logging.file` if set, otherwise drop everything.
    FileOnly,
    Stderr,
}

/// Filter precedence: explicit override, then `RUST_LOG`, then config.
pub fn build_filter(config: &LoggingConfig, override_level: Option<&str>) -> EnvFilter {
    if let Some(level) = override_level {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn init_tracing(
    config: &LoggingConfig,
    override_level: Option<&str>,
    sink: LogSink,
) -> Result<(), AppError> {
    let filter = build_filter(config, override_level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    match (sink, &config.file) {
        (LogSink::Stderr, _) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        (LogSink::FileOnly, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AppError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            let _ = builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init();
        }
        (LogSink::FileOnly, None) => {}
    }
    Ok(())
}
