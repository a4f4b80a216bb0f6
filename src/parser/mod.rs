//! Log parsing: entry grammar, reassembly and classification.
//!
//! This module handles:
//! - Splitting a line stream into logical (multi-line) entries
//! - Matching entries against the header grammar
//! - Separating messages from stack traces and normalizing traces
//! - Flagging error lines in logs without the grammar

pub mod entry;
pub mod grammar;
pub mod markers;
pub mod reassembler;
pub mod schema;

// Re-export main types
pub use entry::{classify, classify_text, split_stack_trace};
pub use grammar::{is_entry_header, normalize_trace, Category};
pub use markers::{looks_like_error, scan_reader, FlaggedLine};
pub use reassembler::EntryReassembler;
pub use schema::{LogicalEntry, ParsedEntry};
