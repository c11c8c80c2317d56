//! Aggregation of records into per-process, per-event-code buckets.
//!
//! This module transforms the parsed record sequence into:
//! - A two-level grouping (process name -> event code -> records)
//! - Summary rows (count + earliest-record fields per bucket)

pub mod grouping;
pub mod summary;

// Re-export main types and functions
pub use grouping::{group_by_process_and_code, GroupedRecords};
pub use summary::{summarize_bucket, SummaryRow};
