//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads report labels
//! 2. Reassembles, classifies and aggregates the log file
//! 3. Ranks the aggregate
//! 4. Prints the text summary and writes the JSON digest

use crate::aggregator::{aggregate_file, AggregateSummary};
use crate::commands::models::AnalyzeArgs;
use crate::output::{to_digest, validate_path, write_digest, Report, ReportLabels, Reporter};
use crate::utils::config::MAX_TOP;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::time::Instant;

/// Execute the analyze command, printing to stdout
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or unreadable log file
/// * Invalid label pack
/// * Digest write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<AggregateSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_analyze(&args, &mut out)
}

/// Execute the analyze command against any writer
pub fn run_analyze<W: Write>(args: &AnalyzeArgs, out: &mut W) -> Result<AggregateSummary> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.log_path.display());

    // Step 1: Labels
    info!("Step 1/3: Loading report labels...");
    let labels = load_labels(args)?;
    let reporter = Reporter::new(labels);

    // Step 2: Aggregate
    info!("Step 2/3: Aggregating log entries...");
    let aggregator = aggregate_file(&args.log_path)
        .with_context(|| format!("Failed to aggregate {}", args.log_path.display()))?;

    // Step 3: Rank and report
    info!("Step 3/3: Ranking and writing reports...");
    let report = reporter.build(&aggregator);

    if let Report::Ranked { records, .. } = &report {
        debug!("Top 3 errors:");
        for ranked in records.iter().take(3) {
            debug!(
                "  {}. x{} {}: {}",
                ranked.rank, ranked.record.count, ranked.record.category, ranked.record.message
            );
        }
    } else {
        warn!("No error entries found in {}", args.log_path.display());
    }

    if args.print_summary || report.is_empty() {
        write!(out, "{}", reporter.render(&report, args.top))
            .context("Failed to write text summary")?;
    }

    if let Some(json_path) = &args.output_json {
        let digest = to_digest(&args.log_path.display().to_string(), &report);
        write_digest(&digest, json_path).context("Failed to write digest JSON")?;
        info!("✓ Digest written to: {}", json_path.display());
    }

    let summary = report.summary();
    info!(
        "Analysis completed in {:.2}s ({} entries, {} distinct)",
        start_time.elapsed().as_secs_f64(),
        summary.total_occurrences,
        summary.distinct_errors
    );

    Ok(summary)
}

fn load_labels(args: &AnalyzeArgs) -> Result<ReportLabels> {
    match &args.labels_path {
        Some(path) => ReportLabels::load(path)
            .with_context(|| format!("Failed to load labels from {}", path.display())),
        None => ReportLabels::builtin(&args.language).context("Failed to select report labels"),
    }
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.log_path.as_os_str().is_empty() {
        anyhow::bail!("Log path cannot be empty");
    }

    if args.labels_path.is_none() {
        ReportLabels::builtin(&args.language)?;
    }

    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("top must be greater than 0");
        }
        if top > MAX_TOP {
            anyhow::bail!("top is too large (max {})", MAX_TOP);
        }
    }

    if let Some(json_path) = &args.output_json {
        validate_path(json_path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            log_path: PathBuf::from("php_errors.log"),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_log_path() {
        let args = AnalyzeArgs {
            log_path: PathBuf::new(),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_unknown_language() {
        let args = AnalyzeArgs {
            language: "xx".to_string(),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_language_ignored_with_labels_file() {
        let args = AnalyzeArgs {
            language: "xx".to_string(),
            labels_path: Some(PathBuf::from("labels.toml")),
            ..args()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_top_bounds() {
        let zero = AnalyzeArgs { top: Some(0), ..args() };
        let huge = AnalyzeArgs { top: Some(MAX_TOP + 1), ..args() };
        let fine = AnalyzeArgs { top: Some(5), ..args() };

        assert!(validate_args(&zero).is_err());
        assert!(validate_args(&huge).is_err());
        assert!(validate_args(&fine).is_ok());
    }
}
