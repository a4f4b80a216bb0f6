//! Content fingerprints identifying "the same error".

use crate::parser::grammar::{normalize_trace, Category};
use crate::parser::schema::ParsedEntry;
use crate::utils::config::FINGERPRINT_SEPARATOR;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 hex digest over `category|message|normalized trace`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash the already normalized parts of an entry
    pub fn compute(category: Category, message: &str, normalized_trace: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(category.label().as_bytes());
        hasher.update(FINGERPRINT_SEPARATOR.as_bytes());
        hasher.update(message.as_bytes());
        hasher.update(FINGERPRINT_SEPARATOR.as_bytes());
        hasher.update(normalized_trace.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Fingerprint a parsed entry; a missing trace normalizes to ""
    pub fn of(entry: &ParsedEntry) -> Self {
        let normalized = entry
            .stack_trace
            .as_deref()
            .map(normalize_trace)
            .unwrap_or_default();
        Self::compute(entry.category, &entry.message, &normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
