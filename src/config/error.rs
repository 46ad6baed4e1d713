//! Error types for config persistence.
//!
//! A missing config file is not an error; see
//! [`LoadOutcome::NotFound`](crate::config::LoadOutcome::NotFound).

use std::path::PathBuf;

/// Failure while loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8 JSON, or a field has the wrong type.
    /// Nothing from the document was applied.
    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The directory or file could not be written.
    #[error("failed to write config to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
