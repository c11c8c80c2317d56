//! Two-level grouping of records by process name and event code.
//!
//! Pure transformation, no I/O. Ordering requirements apply only at
//! write time; buckets here keep records in input order and nothing more.

use crate::reader::Record;
use log::debug;
use std::collections::HashMap;

/// Process name -> event code -> records sharing that pair, in input order
pub type GroupedRecords = HashMap<String, HashMap<i32, Vec<Record>>>;

/// Group records by process name, then by event code
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - The full record sequence, in file order
///
/// # Returns
/// A partition of the input: every record lands in exactly one
/// (process name, event code) bucket, determined by its own fields.
/// Process names match case-sensitively with no normalization.
pub fn group_by_process_and_code(records: Vec<Record>) -> GroupedRecords {
    let mut grouped: GroupedRecords = HashMap::new();

    for record in records {
        grouped
            .entry(record.process_name.clone())
            .or_default()
            .entry(record.event_code)
            .or_default()
            .push(record);
    }

    debug!("Grouped records into {} processes", grouped.len());

    grouped
}
