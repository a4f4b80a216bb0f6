//! Errlog Digest
//!
//! Streaming aggregation of multi-line PHP error logs. Entries split over
//! several physical lines are reassembled, classified, deduplicated by a
//! content fingerprint and ranked by frequency.
//!
//! ```text
//! lines ──► reassembler ──► classifier ──► aggregator ──► reporter
//! ```
//!
//! Most users should use the CLI:
//!
//! ```bash
//! errlog-digest analyze --log /var/log/php_errors.log --json digest.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
