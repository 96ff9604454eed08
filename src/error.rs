use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the appearance config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
