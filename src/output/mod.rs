//! Report rendering and digest output.
//!
//! This module handles:
//! - Report label packs
//! - Ranked text summaries
//! - JSON digests on disk

pub mod json;
pub mod labels;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_digest, to_digest, write_digest};
pub use labels::ReportLabels;
pub use schema::{Digest, DigestEntry};
pub use text::{Report, Reporter};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
