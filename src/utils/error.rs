//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort aggregation of a log source.
///
/// Entries that fail to match the header grammar are never reported here;
/// they are dropped by the classifier.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Log source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read log source '{source_name}': {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl AggregateError {
    pub(crate) fn io(source_name: &str, source: std::io::Error) -> Self {
        Self::Io {
            source_name: source_name.to_string(),
            source,
        }
    }
}

/// Errors that can occur while loading report labels
#[derive(Error, Debug)]
pub enum LabelsError {
    #[error("Failed to read labels file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Labels TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown built-in language '{0}' (available: en, uk)")]
    UnknownLanguage(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
