//! JSON digest writer.
//!
//! Writes the ranked aggregate to a JSON file with proper formatting.

use super::schema::{Digest, DigestEntry};
use super::text::Report;
use super::validate_path;
use crate::utils::config::DIGEST_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Convert a report into the serializable digest form
///
/// **Public** - used by commands before writing
pub fn to_digest(source: &str, report: &Report<'_>) -> Digest {
    use chrono::Utc;

    let (by_category, errors): (BTreeMap<String, u64>, Vec<DigestEntry>) = match report {
        Report::NothingFound => (BTreeMap::new(), Vec::new()),
        Report::Ranked {
            distribution,
            records,
            ..
        } => (
            distribution
                .iter()
                .map(|(category, count)| (category.label().to_string(), *count))
                .collect(),
            records
                .iter()
                .map(|ranked| DigestEntry {
                    rank: ranked.rank,
                    fingerprint: ranked.fingerprint.to_string(),
                    category: ranked.record.category.label().to_string(),
                    message: ranked.record.message.clone(),
                    count: ranked.record.count,
                    timestamps: ranked.record.timestamps.clone(),
                    stack_trace: ranked.record.stack_trace.clone(),
                })
                .collect(),
        ),
    };

    let summary = report.summary();

    Digest {
        version: DIGEST_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        total_occurrences: summary.total_occurrences,
        distinct_errors: summary.distinct_errors,
        by_category,
        errors,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Write a digest to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_digest(digest: &Digest, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing digest to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, digest).map_err(OutputError::SerializationFailed)?;

    info!(
        "Digest written successfully ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Read a digest from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_digest(input_path: impl AsRef<Path>) -> Result<Digest, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading digest from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let digest: Digest = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Digest loaded: version {}, source {}",
        digest.version, digest.source
    );

    Ok(digest)
}
