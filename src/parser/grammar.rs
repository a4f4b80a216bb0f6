//! Entry header grammar.
//!
//! A logical entry starts with a header of the form
//!
//! ```text
//! [<timestamp>] <CATEGORY LABEL>: <rest-of-entry...>
//! ```
//!
//! where the timestamp contains no `]` and the category label is one of the
//! closed set in [`Category`]. The rest of the entry may span several
//! physical lines.

use crate::utils::config::NORMALIZED_FRAME;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Error classification, as printed by the PHP runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PHP Fatal error")]
    FatalError,
    #[serde(rename = "PHP Warning")]
    Warning,
    #[serde(rename = "PHP Notice")]
    Notice,
    #[serde(rename = "PHP Parse error")]
    ParseError,
    #[serde(rename = "PHP Core error")]
    CoreError,
    #[serde(rename = "PHP Core warning")]
    CoreWarning,
    #[serde(rename = "PHP Compile error")]
    CompileError,
    #[serde(rename = "PHP Compile warning")]
    CompileWarning,
    #[serde(rename = "PHP User error")]
    UserError,
    #[serde(rename = "PHP User warning")]
    UserWarning,
    #[serde(rename = "PHP User notice")]
    UserNotice,
    #[serde(rename = "PHP Strict Standards")]
    StrictStandards,
    #[serde(rename = "PHP Deprecated")]
    Deprecated,
    #[serde(rename = "PHP User deprecated")]
    UserDeprecated,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 14] = [
        Category::FatalError,
        Category::Warning,
        Category::Notice,
        Category::ParseError,
        Category::CoreError,
        Category::CoreWarning,
        Category::CompileError,
        Category::CompileWarning,
        Category::UserError,
        Category::UserWarning,
        Category::UserNotice,
        Category::StrictStandards,
        Category::Deprecated,
        Category::UserDeprecated,
    ];

    /// The exact label used in log headers (case- and spacing-exact)
    pub fn label(self) -> &'static str {
        match self {
            Category::FatalError => "PHP Fatal error",
            Category::Warning => "PHP Warning",
            Category::Notice => "PHP Notice",
            Category::ParseError => "PHP Parse error",
            Category::CoreError => "PHP Core error",
            Category::CoreWarning => "PHP Core warning",
            Category::CompileError => "PHP Compile error",
            Category::CompileWarning => "PHP Compile warning",
            Category::UserError => "PHP User error",
            Category::UserWarning => "PHP User warning",
            Category::UserNotice => "PHP User notice",
            Category::StrictStandards => "PHP Strict Standards",
            Category::Deprecated => "PHP Deprecated",
            Category::UserDeprecated => "PHP User deprecated",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("Unknown error category: {}", s))
    }
}

/// Full entry grammar in dot-matches-newline mode.
///
/// Groups: 1 = timestamp, 2 = category label, 3 = message and trace.
pub(crate) fn entry_regex() -> &'static Regex {
    static ENTRY: OnceLock<Regex> = OnceLock::new();
    ENTRY.get_or_init(|| {
        let labels = Category::ALL
            .iter()
            .map(|category| regex::escape(category.label()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?s)\A\[([^\]]*)\]\s+({}):\s+(.*)", labels);
        Regex::new(&pattern).expect("entry grammar must be a valid regex")
    })
}

/// Stack frame reference: `#<digits> <anything, non-greedy>(<digits>)`
pub(crate) fn frame_regex() -> &'static Regex {
    static FRAME: OnceLock<Regex> = OnceLock::new();
    FRAME.get_or_init(|| {
        Regex::new(r"#\d+\s+.*?\(\d+\)").expect("frame pattern must be a valid regex")
    })
}

/// Check whether a single physical line opens a new logical entry
///
/// The line is tested with its terminator, so a header whose body is empty
/// still matches when followed by a newline.
pub fn is_entry_header(line: &str) -> bool {
    entry_regex().is_match(line)
}

/// Replace every frame reference with the canonical placeholder
///
/// Only used for fingerprinting; display always uses the raw trace.
pub fn normalize_trace(trace: &str) -> String {
    frame_regex().replace_all(trace, NORMALIZED_FRAME).into_owned()
}
