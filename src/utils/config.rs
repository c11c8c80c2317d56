//! Configuration and constants for the event log format.

/// Field delimiter used by both input logs and output reports
pub const FIELD_DELIMITER: char = '|';

/// Minimum number of fields a data line must carry
/// (extra fields beyond the 5th are ignored)
pub const EXPECTED_FIELD_COUNT: usize = 5;

/// Lines starting with this token (after trimming) are column headers, not data
pub const HEADER_TOKEN: &str = "TIMESTAMP";

/// Header written as the first line of every summary report
pub const OUTPUT_HEADER: &str = "EVENT|UID|PID|PROCESS_NAME|COUNTER|FIRST_TIMESTAMP";

/// Extension for summary report files
pub const OUTPUT_EXTENSION: &str = "txt";
