//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;
pub mod scan;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, run_analyze, validate_args};
pub use models::{AnalyzeArgs, ScanArgs};
pub use scan::{execute_scan, run_scan};
pub use utils::{display_schema, display_version, validate_digest_file};
