//! Line-level error detection for logs that do not follow the entry grammar.
//!
//! A line is flagged when it contains any of [`ERROR_MARKERS`], either in
//! upper case or fully lower-cased. Mixed case ("Error") does not count.

use crate::utils::config::ERROR_MARKERS;
use serde::Serialize;
use std::io::{self, BufRead};

/// A physical line flagged by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedLine {
    /// 0-based line index in the source
    pub index: usize,
    /// Line text without its terminator
    pub text: String,
}

/// Check a single line for error markers
pub fn looks_like_error(line: &str) -> bool {
    ERROR_MARKERS
        .iter()
        .any(|marker| line.contains(marker) || line.contains(marker.to_lowercase().as_str()))
}

/// Scan every line of a reader and collect the flagged ones
///
/// # Errors
/// Propagates the first read error (including invalid UTF-8).
pub fn scan_reader<R: BufRead>(reader: R) -> io::Result<Vec<FlaggedLine>> {
    let mut flagged = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if looks_like_error(&line) {
            flagged.push(FlaggedLine { index, text: line });
        }
    }
    Ok(flagged)
}
