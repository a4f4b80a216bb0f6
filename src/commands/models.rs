use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Log file to aggregate
    pub log_path: PathBuf,

    /// Built-in label language (ignored when `labels_path` is set)
    pub language: String,

    /// TOML label pack overriding the built-in one
    pub labels_path: Option<PathBuf>,

    /// Output path for the JSON digest (optional)
    pub output_json: Option<PathBuf>,

    /// Render only the N highest-ranked errors
    pub top: Option<usize>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            log_path: PathBuf::new(),
            language: "en".to_string(),
            labels_path: None,
            output_json: None,
            top: None,
            print_summary: true,
        }
    }
}

/// Arguments for the scan command
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Plain-text log file to scan
    pub log_path: PathBuf,
}
