//! Summary statistics and ranking over an aggregate.
//!
//! The ranking is by occurrence count, descending. Records with equal
//! counts keep their first-seen order.

use super::fingerprint::Fingerprint;
use super::store::{AggregateRecord, ErrorAggregator};
use crate::parser::grammar::Category;
use log::debug;
use std::collections::BTreeMap;

/// Headline numbers for one aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    /// Sum of all record counts
    pub total_occurrences: u64,

    /// Number of distinct fingerprints
    pub distinct_errors: usize,
}

/// A record with its 1-based position in the ranking
#[derive(Debug, Clone, Copy)]
pub struct RankedRecord<'a> {
    pub rank: usize,
    pub fingerprint: &'a Fingerprint,
    pub record: &'a AggregateRecord,
}

/// Calculate headline numbers
pub fn summarize(aggregator: &ErrorAggregator) -> AggregateSummary {
    AggregateSummary {
        total_occurrences: aggregator.total_occurrences(),
        distinct_errors: aggregator.len(),
    }
}

/// Rank every record by count
///
/// **Public** - main entry point for ranking
///
/// # Returns
/// All records, non-increasing in `count`, ranks starting at 1
pub fn rank_records(aggregator: &ErrorAggregator) -> Vec<RankedRecord<'_>> {
    let mut ordered: Vec<(&Fingerprint, &AggregateRecord)> = aggregator.iter().collect();

    // Stable sort: ties stay in first-seen order
    ordered.sort_by(|a, b| b.1.count.cmp(&a.1.count));

    debug!("Ranked {} distinct errors", ordered.len());

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, (fingerprint, record))| RankedRecord {
            rank: i + 1,
            fingerprint,
            record,
        })
        .collect()
}

/// Occurrences per category
///
/// Categories with no occurrences are left out.
pub fn calculate_category_distribution(aggregator: &ErrorAggregator) -> BTreeMap<Category, u64> {
    let mut distribution = BTreeMap::new();
    for (_, record) in aggregator.iter() {
        *distribution.entry(record.category).or_insert(0) += record.count;
    }
    distribution
}
