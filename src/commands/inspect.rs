//! Inspect command implementation.
//!
//! Reads an event log and prints a line census (valid, header/blank,
//! malformed) without writing any reports. Uses the same classification
//! as the summarize command, so the counts match what a real run would
//! parse.

use crate::reader::{is_header_or_blank, open_log_file, parse_event_line};
use crate::utils::error::ReadError;
use anyhow::Result;
use log::debug;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Per-file line counts from an inspect run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LineCensus {
    /// Lines that parse into a record
    pub valid: usize,

    /// Blank lines and column headers (skipped silently by the reader)
    pub header_or_blank: usize,

    /// Data lines with too few fields or a non-numeric value
    pub malformed: usize,
}

/// Count line classes in an event log
///
/// **Public** - also usable from tests
///
/// # Errors
/// * `ReadError::NotFound` - The file does not exist
/// * `ReadError::Io` - Any other failure opening or reading the file
pub fn census_log_file(path: impl AsRef<Path>) -> Result<LineCensus, ReadError> {
    let path = path.as_ref();

    let file = open_log_file(path)?;

    let mut census = LineCensus::default();

    for line in BufReader::new(file).lines() {
        let line = line?;

        if is_header_or_blank(&line) {
            census.header_or_blank += 1;
        } else if parse_event_line(&line).is_some() {
            census.valid += 1;
        } else {
            census.malformed += 1;
        }
    }

    debug!("Census of {}: {:?}", path.display(), census);

    Ok(census)
}

/// Inspect an event log file and print its line census
///
/// **Public** - command implementation called from main.rs
pub fn inspect_log_file(path: PathBuf) -> Result<()> {
    println!("Inspecting event log: {}", path.display());

    let census = census_log_file(&path)?;

    println!("  Valid records:   {}", census.valid);
    println!("  Headers/blanks:  {}", census.header_or_blank);
    println!("  Malformed lines: {}", census.malformed);

    Ok(())
}
