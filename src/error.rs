use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerialError {
    /// The rendered text did not fit and was cut before being sent.
    #[error("output truncated to {sent} bytes (buffer capacity {capacity})")]
    Truncated { capacity: usize, sent: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid percent escape at offset {offset}")]
    InvalidEscape { offset: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
