//! Aggregation of parsed entries into deduplicated, ranked records.
//!
//! This module transforms parsed entries into:
//! - Content fingerprints (category, message, normalized trace)
//! - One accumulating record per fingerprint
//! - Summary counts, ranking and per-category distribution

pub mod fingerprint;
pub mod metrics;
pub mod store;

// Re-export main types and functions
pub use fingerprint::Fingerprint;
pub use metrics::{
    calculate_category_distribution, rank_records, summarize, AggregateSummary, RankedRecord,
};
pub use store::{aggregate_file, aggregate_reader, AggregateRecord, ErrorAggregator};
