use crate::output::read_digest;
use crate::utils::config::DIGEST_SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a digest JSON file
pub fn validate_digest_file(file_path: PathBuf) -> Result<()> {
    println!("Validating digest: {}", file_path.display());

    let digest = read_digest(&file_path)?;

    println!("✓ Valid digest JSON");
    println!("  Version: {}", digest.version);
    println!("  Source: {}", digest.source);
    println!("  Total Errors: {}", digest.total_occurrences);
    println!("  Distinct Errors: {}", digest.distinct_errors);
    println!("  Categories: {}", digest.by_category.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Errlog Digest Schema");
    println!("Current Version: {}", DIGEST_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Aggregated log source");
        println!("  total_occurrences: number  - Sum of all error counts");
        println!("  distinct_errors: number    - Number of distinct fingerprints");
        println!("  by_category: object        - Occurrences per category label");
        println!("  errors: array              - Errors ranked by count");
        println!("    rank: number             - 1-based rank");
        println!("    fingerprint: string      - SHA-256 of category|message|normalized trace");
        println!("    category: string         - Category label (e.g., 'PHP Warning')");
        println!("    message: string          - First-seen message");
        println!("    count: number            - Occurrences");
        println!("    timestamps: array        - Raw timestamps in file order");
        println!("    stack_trace: string?     - First-seen raw stack trace");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Errlog Digest v{}", env!("CARGO_PKG_VERSION"));
    println!("Digest Schema: v{}", DIGEST_SCHEMA_VERSION);
    println!();
    println!("Reassembles, deduplicates and ranks multi-line PHP error log entries.");
}
