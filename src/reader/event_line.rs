//! Single-line classification and parsing.
//!
//! A line is either a header/blank line (skipped silently), a valid data
//! line (yields a `Record`), or malformed (warned about and skipped).
//! Malformed lines are an expected, frequent case and never abort a read.

use super::record::Record;
use crate::utils::config::{EXPECTED_FIELD_COUNT, FIELD_DELIMITER, HEADER_TOKEN};
use log::warn;

/// Check whether a line is a column header or blank
///
/// **Public** - also used by the inspect command for its line census
pub fn is_header_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(HEADER_TOKEN)
}

/// Parse one data line into a `Record`
///
/// **Public** - main per-line entry point
///
/// # Arguments
/// * `line` - Raw line content (not a header/blank line)
///
/// # Returns
/// `Some(Record)` for a valid line, `None` for a malformed one.
/// Malformed lines (too few fields, or a non-numeric value in fields 0-3)
/// are logged with their content and skipped; fields beyond the 5th are
/// ignored.
pub fn parse_event_line(line: &str) -> Option<Record> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if parts.len() < EXPECTED_FIELD_COUNT {
        warn!("skipping line with too few fields: {}", line);
        return None;
    }

    match parse_fields(&parts) {
        Some(record) => Some(record),
        None => {
            warn!("skipping line with non-numeric field: {}", line);
            None
        }
    }
}

/// Convert the split fields into typed values
///
/// **Private** - internal helper for parse_event_line
fn parse_fields(parts: &[&str]) -> Option<Record> {
    let timestamp: i64 = parts[0].trim().parse().ok()?;
    let event_code: i32 = parts[1].trim().parse().ok()?;
    let user_id: i32 = parts[2].trim().parse().ok()?;
    let process_id: i32 = parts[3].trim().parse().ok()?;
    let process_name = parts[4].trim();

    Some(Record::new(
        timestamp,
        event_code,
        user_id,
        process_id,
        process_name,
    ))
}
