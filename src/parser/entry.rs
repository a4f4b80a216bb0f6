//! Classify logical entries and split message from stack trace.

use super::grammar::{entry_regex, Category};
use super::schema::{LogicalEntry, ParsedEntry};
use crate::utils::config::STACK_TRACE_MARKER;

/// Parse a logical entry against the full entry grammar
///
/// **Public** - main entry point for classification
///
/// # Returns
/// `None` when the entry text does not match the grammar. Callers drop
/// such entries without reporting an error.
pub fn classify(entry: &LogicalEntry) -> Option<ParsedEntry> {
    classify_text(&entry.text())
}

/// Same as [`classify`], on already concatenated entry text
pub fn classify_text(text: &str) -> Option<ParsedEntry> {
    let captures = entry_regex().captures(text)?;

    let timestamp = captures.get(1)?.as_str().trim().to_string();
    let category: Category = captures.get(2)?.as_str().parse().ok()?;
    let (message, stack_trace) = split_stack_trace(captures.get(3)?.as_str().trim());

    Some(ParsedEntry {
        timestamp,
        category,
        message,
        stack_trace,
    })
}

/// Split entry body at the first `Stack trace:` marker
///
/// The message is everything before the marker, trimmed. The trace keeps
/// the marker itself and everything after it, trimmed.
pub fn split_stack_trace(body: &str) -> (String, Option<String>) {
    match body.find(STACK_TRACE_MARKER) {
        Some(index) => (
            body[..index].trim().to_string(),
            Some(body[index..].trim().to_string()),
        ),
        None => (body.trim().to_string(), None),
    }
}
