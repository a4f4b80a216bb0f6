//! Text reporter.
//!
//! Turns an aggregate into a ranked report and renders it as plain text,
//! one block per distinct error.

use super::labels::ReportLabels;
use crate::aggregator::metrics::{
    calculate_category_distribution, rank_records, summarize, AggregateSummary, RankedRecord,
};
use crate::aggregator::store::{AggregateRecord, ErrorAggregator};
use crate::parser::grammar::Category;
use crate::utils::config::RULE_WIDTH;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Outcome of reporting on one aggregate
#[derive(Debug, Clone)]
pub enum Report<'a> {
    /// The source produced no aggregate records
    NothingFound,

    Ranked {
        summary: AggregateSummary,
        distribution: BTreeMap<Category, u64>,
        records: Vec<RankedRecord<'a>>,
    },
}

impl Report<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Report::NothingFound)
    }

    pub fn summary(&self) -> AggregateSummary {
        match self {
            Report::NothingFound => AggregateSummary::default(),
            Report::Ranked { summary, .. } => *summary,
        }
    }
}

/// Formats aggregates with a fixed set of labels
#[derive(Debug, Clone)]
pub struct Reporter {
    labels: ReportLabels,
}

impl Reporter {
    pub fn new(labels: ReportLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &ReportLabels {
        &self.labels
    }

    /// Rank an aggregate; never fails, an empty one yields `NothingFound`
    pub fn build<'a>(&self, aggregator: &'a ErrorAggregator) -> Report<'a> {
        if aggregator.is_empty() {
            return Report::NothingFound;
        }

        Report::Ranked {
            summary: summarize(aggregator),
            distribution: calculate_category_distribution(aggregator),
            records: rank_records(aggregator),
        }
    }

    /// Format one record block
    ///
    /// The raw stack trace, when present, is wrapped in
    /// `<StackTrace>` / `</StackTrace>` lines.
    pub fn format_record(&self, rank: usize, record: &AggregateRecord) -> String {
        let labels = &self.labels;
        let mut block = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(block, "{} | {}: {}", rank, labels.error_type, record.category);
        let _ = writeln!(block, "{}: {}", labels.count, record.count);
        let _ = writeln!(block, "{}: {}", labels.message, record.message);
        if let (Some(first), Some(last)) = (record.first_timestamp(), record.last_timestamp()) {
            let _ = writeln!(block, "{}: {}", labels.first_timestamp, first);
            let _ = writeln!(block, "{}: {}", labels.last_timestamp, last);
        }

        if let Some(trace) = &record.stack_trace {
            block.push_str("<StackTrace>\n");
            block.push_str(trace);
            block.push_str("\n</StackTrace>\n");
        }

        block
    }

    /// Render the full report
    ///
    /// # Arguments
    /// * `report` - Report from [`Reporter::build`]
    /// * `top` - Render only the first `top` blocks (totals stay complete)
    pub fn render(&self, report: &Report<'_>, top: Option<usize>) -> String {
        let labels = &self.labels;

        let (summary, distribution, records) = match report {
            Report::NothingFound => return format!("{}\n", labels.nothing_found),
            Report::Ranked {
                summary,
                distribution,
                records,
            } => (summary, distribution, records),
        };

        let heavy_rule = "=".repeat(RULE_WIDTH);
        let light_rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{}", heavy_rule);
        let _ = writeln!(out, "{}", labels.heading);
        let _ = writeln!(out, "{}", heavy_rule);
        let _ = writeln!(out, "{}: {}", labels.total_errors, summary.total_occurrences);
        let _ = writeln!(out, "{}: {}", labels.unique_errors, summary.distinct_errors);

        let breakdown = distribution
            .iter()
            .map(|(category, count)| format!("{} {}", category, count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{}: {}", labels.by_category, breakdown);
        out.push('\n');

        let limit = top.unwrap_or(records.len());
        for ranked in records.iter().take(limit) {
            let _ = writeln!(out, "{}", light_rule);
            let _ = writeln!(out, "{}", self.format_record(ranked.rank, ranked.record));
        }

        out
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportLabels::english())
    }
}
