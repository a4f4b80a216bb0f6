//! Entry types produced by the parser.

use super::grammar::Category;

/// One complete error report, possibly spanning several physical lines.
///
/// Lines keep their original terminators so that concatenating them
/// reproduces the source text exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalEntry {
    lines: Vec<String>,
}

impl LogicalEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Concatenated text of all constituent lines
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// A logical entry that matched the header grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Raw timestamp text between the brackets, surrounding whitespace removed
    pub timestamp: String,
    pub category: Category,
    /// Message body, trimmed, without the stack trace
    pub message: String,
    /// Everything from the `Stack trace:` marker onward, trimmed
    pub stack_trace: Option<String>,
}
