//! Event log file reading.
//!
//! Reads the whole input file into an ordered sequence of valid records.
//! Header and blank lines are skipped silently, malformed lines with a
//! warning; only opening or reading the file itself can fail the run.

use super::event_line::{is_header_or_blank, parse_event_line};
use super::record::Record;
use crate::utils::error::ReadError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Read all valid records from an event log file
///
/// **Public** - main entry point for reading
///
/// # Arguments
/// * `path` - Path to the input event log
///
/// # Returns
/// Records in file order. An empty vector is a valid outcome
/// (a file with only headers, blanks, or malformed lines).
///
/// # Errors
/// * `ReadError::NotFound` - The file does not exist
/// * `ReadError::Io` - Any other failure opening or reading the file
pub fn read_events(path: impl AsRef<Path>) -> Result<Vec<Record>, ReadError> {
    let path = path.as_ref();

    info!("Reading event log: {}", path.display());

    let file = open_log_file(path)?;

    let mut records = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line?;

        if is_header_or_blank(&line) {
            continue;
        }

        if let Some(record) = parse_event_line(&line) {
            records.push(record);
        }
    }

    debug!("Parsed {} valid records", records.len());

    Ok(records)
}

/// Open an event log, classifying a missing file as its own error
///
/// **Public** - shared by every command that reads an event log, so the
/// not-found vs generic-I/O distinction cannot drift between them
pub fn open_log_file(path: &Path) -> Result<File, ReadError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Io(e),
    })
}
