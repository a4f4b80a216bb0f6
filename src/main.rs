//! Errlog Digest CLI
//!
//! Aggregates PHP error logs into deduplicated, frequency-ranked reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use errlog_digest::commands::{
    display_schema, display_version, execute_analyze, execute_scan, validate_args,
    validate_digest_file, AnalyzeArgs, ScanArgs,
};

/// Errlog Digest - frequency-ranked PHP error log summaries
#[derive(Parser, Debug)]
#[command(name = "errlog-digest")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate and rank the errors of a PHP error log
    Analyze {
        /// Path to the log file
        #[arg(short, long)]
        log: PathBuf,

        /// Report language (en, uk)
        #[arg(long, default_value = "en", env = "ERRLOG_DIGEST_LANG")]
        lang: String,

        /// TOML file with custom report labels
        #[arg(long)]
        labels: Option<PathBuf>,

        /// Output path for the JSON digest
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Print only the N most frequent errors
        #[arg(long)]
        top: Option<usize>,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// List error-marked lines of a log without the PHP entry format
    Scan {
        /// Path to the log file
        #[arg(short, long)]
        log: PathBuf,
    },

    /// Validate a digest JSON file
    Validate {
        /// Path to digest JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            log,
            lang,
            labels,
            json,
            top,
            quiet,
        } => {
            let args = AnalyzeArgs {
                log_path: log,
                language: lang,
                labels_path: labels,
                output_json: json,
                top,
                print_summary: !quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Scan { log } => {
            execute_scan(ScanArgs { log_path: log })?;
        }

        Commands::Validate { file } => {
            validate_digest_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
