//! JSON digest schema.
//!
//! This module defines the structure of the digest files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level digest structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log source that was aggregated
    pub source: String,

    /// Sum of all error counts
    pub total_occurrences: u64,

    /// Number of distinct fingerprints
    pub distinct_errors: usize,

    /// Occurrences per category label
    pub by_category: BTreeMap<String, u64>,

    /// Records ranked by count
    pub errors: Vec<DigestEntry>,

    /// Timestamp when the digest was generated
    pub generated_at: String,
}

/// One aggregate record in the digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestEntry {
    pub rank: usize,
    pub fingerprint: String,
    pub category: String,
    pub message: String,
    pub count: u64,
    /// Raw timestamps in file order
    pub timestamps: Vec<String>,
    pub stack_trace: Option<String>,
}
