//! Scan command implementation.
//!
//! Lists lines carrying error markers in logs that do not follow the
//! entry grammar.

use crate::commands::models::ScanArgs;
use crate::parser::markers::scan_reader;
use crate::utils::error::AggregateError;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};

/// Execute the scan command, printing to stdout
pub fn execute_scan(args: ScanArgs) -> Result<usize> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_scan(&args, &mut out)
}

/// Execute the scan command against any writer
///
/// # Returns
/// Number of flagged lines
pub fn run_scan<W: Write>(args: &ScanArgs, out: &mut W) -> Result<usize> {
    let path = &args.log_path;
    let source_name = path.display().to_string();

    info!("Scanning {} for error markers", source_name);

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AggregateError::SourceNotFound(path.clone()),
        _ => AggregateError::io(&source_name, e),
    })?;

    let flagged =
        scan_reader(BufReader::new(file)).map_err(|e| AggregateError::io(&source_name, e))?;

    for line in &flagged {
        writeln!(out, "{}: {}", line.index, line.text).context("Failed to write scan output")?;
    }

    info!("Flagged {} lines in {}", flagged.len(), source_name);

    Ok(flagged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_scan_lists_flagged_lines() {
        let mut log = NamedTempFile::new().unwrap();
        write!(log, "boot ok\nERROR: disk full\nwarning: retrying\n").unwrap();

        let mut out = Vec::new();
        let count = run_scan(
            &ScanArgs {
                log_path: log.path().to_path_buf(),
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1: ERROR: disk full\n2: warning: retrying\n"
        );
    }

    #[test]
    fn test_run_scan_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ScanArgs {
            log_path: dir.path().join("missing.log"),
        };
        let err = run_scan(&args, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AggregateError>(),
            Some(AggregateError::SourceNotFound(_))
        ));
    }
}
