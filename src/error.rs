use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures at the edges of the app: config, terminal and output I/O.
///
/// The counter itself never fails; these all come from the host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Terminal input closed unexpectedly")]
    InputClosed,

    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),
}
