//! Summary row derivation for one (process, event code) bucket.

use crate::reader::Record;

/// One derived output line: the census of a single bucket
///
/// The user id, process id, and timestamp are taken from the bucket's
/// earliest-timestamp record; ties go to the record that appeared first
/// in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub event_code: i32,
    pub user_id: i32,
    pub process_id: i32,
    pub process_name: String,
    pub counter: usize,
    pub first_timestamp: i64,
}

/// Derive the summary row for a bucket
///
/// **Public** - called by the writer, one row per event code
///
/// # Arguments
/// * `event_code` - The bucket's event code key
/// * `bucket` - Records sharing one (process name, event code) pair,
///   in input order
///
/// # Returns
/// `None` for an empty bucket (cannot occur for buckets produced by
/// the aggregator, which only creates a bucket to push into it).
pub fn summarize_bucket(event_code: i32, bucket: &[Record]) -> Option<SummaryRow> {
    let first = bucket
        .iter()
        .enumerate()
        .min_by_key(|(position, record)| (record.timestamp, *position))
        .map(|(_, record)| record)?;

    Some(SummaryRow {
        event_code,
        user_id: first.user_id,
        process_id: first.process_id,
        process_name: first.process_name.clone(),
        counter: bucket.len(),
        first_timestamp: first.timestamp,
    })
}
