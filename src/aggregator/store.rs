//! Fingerprint-keyed accumulation of parsed entries.
//!
//! Records are kept in first-seen order; the fingerprint index points into
//! that list. Each source gets its own [`ErrorAggregator`], there is no
//! shared state between runs.

use super::fingerprint::Fingerprint;
use crate::parser::entry::classify;
use crate::parser::grammar::Category;
use crate::parser::reassembler::EntryReassembler;
use crate::parser::schema::ParsedEntry;
use crate::utils::error::AggregateError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Accumulated statistics for one fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// First-seen category
    pub category: Category,

    /// First-seen message
    pub message: String,

    /// First-seen raw (not normalized) stack trace
    pub stack_trace: Option<String>,

    /// Number of entries with this fingerprint
    pub count: u64,

    /// Raw timestamps in file order, one per occurrence
    pub timestamps: Vec<String>,
}

impl AggregateRecord {
    fn first(entry: ParsedEntry) -> Self {
        Self {
            category: entry.category,
            message: entry.message,
            stack_trace: entry.stack_trace,
            count: 1,
            timestamps: vec![entry.timestamp],
        }
    }

    pub fn first_timestamp(&self) -> Option<&str> {
        self.timestamps.first().map(String::as_str)
    }

    pub fn last_timestamp(&self) -> Option<&str> {
        self.timestamps.last().map(String::as_str)
    }
}

/// Mapping of fingerprint to [`AggregateRecord`]
#[derive(Debug, Clone, Default)]
pub struct ErrorAggregator {
    index: HashMap<Fingerprint, usize>,
    records: Vec<(Fingerprint, AggregateRecord)>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parsed entry
    ///
    /// An unseen fingerprint creates a record; a known one only bumps the
    /// count and appends the timestamp. Category, message and trace of an
    /// existing record are never overwritten.
    pub fn record(&mut self, entry: ParsedEntry) -> &Fingerprint {
        let fingerprint = Fingerprint::of(&entry);

        let slot = match self.index.get(&fingerprint) {
            Some(&slot) => {
                let record = &mut self.records[slot].1;
                record.count += 1;
                record.timestamps.push(entry.timestamp);
                slot
            }
            None => {
                let slot = self.records.len();
                self.index.insert(fingerprint.clone(), slot);
                self.records.push((fingerprint, AggregateRecord::first(entry)));
                slot
            }
        };

        &self.records[slot].0
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&AggregateRecord> {
        self.index
            .get(fingerprint)
            .map(|&slot| &self.records[slot].1)
    }

    /// Number of distinct fingerprints
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record counts
    pub fn total_occurrences(&self) -> u64 {
        self.records.iter().map(|(_, record)| record.count).sum()
    }

    /// Records in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &AggregateRecord)> {
        self.records.iter().map(|(fp, record)| (fp, record))
    }
}

/// Aggregate every entry of a line-oriented reader
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `reader` - Source of log lines
/// * `source_name` - Name used in error messages and logs
///
/// # Errors
/// * `AggregateError::Io` - Read failure; no partial result is returned
pub fn aggregate_reader<R: BufRead>(
    reader: R,
    source_name: &str,
) -> Result<ErrorAggregator, AggregateError> {
    let mut aggregator = ErrorAggregator::new();
    let mut skipped = 0u64;

    for entry in EntryReassembler::new(reader) {
        let entry = entry.map_err(|e| AggregateError::io(source_name, e))?;
        match classify(&entry) {
            Some(parsed) => {
                aggregator.record(parsed);
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} entries not matching the header grammar", skipped);
    }
    info!(
        "Aggregated {} entries into {} distinct errors from {}",
        aggregator.total_occurrences(),
        aggregator.len(),
        source_name
    );

    Ok(aggregator)
}

/// Open a log file and aggregate it
///
/// # Errors
/// * `AggregateError::SourceNotFound` - The file does not exist
/// * `AggregateError::Io` - Any other open or read failure
pub fn aggregate_file(path: impl AsRef<Path>) -> Result<ErrorAggregator, AggregateError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    debug!("Opening log source: {}", source_name);

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AggregateError::SourceNotFound(path.to_path_buf()),
        _ => AggregateError::io(&source_name, e),
    })?;

    aggregate_reader(BufReader::new(file), &source_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parsed(timestamp: &str, message: &str, trace: Option<&str>) -> ParsedEntry {
        ParsedEntry {
            timestamp: timestamp.to_string(),
            category: Category::Warning,
            message: message.to_string(),
            stack_trace: trace.map(str::to_string),
        }
    }

    #[test]
    fn test_record_creates_then_updates() {
        let mut aggregator = ErrorAggregator::new();
        let first = aggregator.record(parsed("t1", "a", None)).clone();
        let second = aggregator.record(parsed("t2", "a", None)).clone();

        assert_eq!(first, second);
        assert_eq!(aggregator.len(), 1);

        let record = aggregator.get(&first).unwrap();
        assert_eq!(record.count, 2);
        assert_eq!(record.timestamps, vec!["t1", "t2"]);
    }

    #[test]
    fn test_first_write_wins_for_trace() {
        let mut aggregator = ErrorAggregator::new();
        let fp = aggregator
            .record(parsed("t1", "a", Some("Stack trace:\n#0 /x.php(1): f()")))
            .clone();
        aggregator.record(parsed("t2", "a", Some("Stack trace:\n#0 /x.php(2): f()")));

        let record = aggregator.get(&fp).unwrap();
        assert_eq!(record.count, 2);
        assert_eq!(
            record.stack_trace.as_deref(),
            Some("Stack trace:\n#0 /x.php(1): f()")
        );
    }

    #[test]
    fn test_iter_preserves_first_seen_order() {
        let mut aggregator = ErrorAggregator::new();
        aggregator.record(parsed("t1", "b", None));
        aggregator.record(parsed("t2", "a", None));
        aggregator.record(parsed("t3", "b", None));

        let messages: Vec<&str> = aggregator.iter().map(|(_, r)| r.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "a"]);
        assert_eq!(aggregator.total_occurrences(), 3);
    }

    #[test]
    fn test_aggregate_reader_skips_unparsable_entries() {
        let input = "noise\n[t1] PHP Notice: one\n[t2] PHP Notice: one\n";
        let aggregator = aggregate_reader(Cursor::new(input), "test").unwrap();
        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.total_occurrences(), 2);
    }

    #[test]
    fn test_aggregate_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.log");
        match aggregate_file(&missing) {
            Err(AggregateError::SourceNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregate_reader_read_failure_carries_source_name() {
        let bytes: &[u8] = b"[t] PHP Notice: a\n\xff\n";
        let err = aggregate_reader(Cursor::new(bytes), "broken.log").unwrap_err();
        assert!(err.to_string().contains("broken.log"));
    }
}
