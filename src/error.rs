//! Error types for roostmap.

use std::path::PathBuf;

/// Errors surfaced to the caller.
///
/// Problems with a single occurrence record are never errors: the record is
/// dropped and selection carries on. Everything here stops the run.
#[derive(thiserror::Error, Debug)]
pub enum RoostError {
    #[error("Invalid region: {0}")]
    InvalidRegion(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Malformed occurrence file '{path}': {message}")]
    OccurrenceFile { path: PathBuf, message: String },
    #[error("Error reading from '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(String),
}

impl RoostError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RoostError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RoostError>;
