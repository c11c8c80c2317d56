//! Event log reading and parsing.
//!
//! This module handles:
//! - The `Record` value type
//! - Classifying lines (data, header/blank, malformed)
//! - Reading a log file into an ordered record sequence

pub mod event_line;
pub mod log_file;
pub mod record;

// Re-export main types and functions
pub use event_line::{is_header_or_blank, parse_event_line};
pub use log_file::{open_log_file, read_events};
pub use record::Record;
