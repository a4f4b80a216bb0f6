//! Configuration and constants for the CLI.

/// Current JSON digest schema version
pub const DIGEST_SCHEMA_VERSION: &str = "1.0.0";

/// Marker that separates the message body from the stack trace.
/// Matching is case-sensitive and splits at the first occurrence.
pub const STACK_TRACE_MARKER: &str = "Stack trace:";

/// Placeholder written over every stack frame reference during normalization
pub const NORMALIZED_FRAME: &str = "#N file(line)";

/// Joins category, message and normalized trace before hashing
pub const FINGERPRINT_SEPARATOR: &str = "|";

/// Width of the `=` / `-` rules in the text report
pub const RULE_WIDTH: usize = 80;

/// Upper bound for `--top`
pub const MAX_TOP: usize = 10_000;

// Markers used by the plain-text scanner. Each one is also matched in
// all-lowercase form ("error", "warning", ...).
pub const ERROR_MARKERS: &[&str] = &["WARNING", "ERROR", "CRITICAL", "EMERGENCY"];
