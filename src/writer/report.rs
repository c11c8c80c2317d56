//! Summary report file writer.
//!
//! Writes one pipe-delimited report per process name into the output
//! directory: a fixed header line, then one summary line per event code
//! in ascending numeric order.

use crate::aggregator::{summarize_bucket, GroupedRecords, SummaryRow};
use crate::reader::Record;
use crate::utils::config::{OUTPUT_EXTENSION, OUTPUT_HEADER};
use crate::utils::error::WriteError;
use crate::writer::filename::sanitize_process_name;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one summary report per process
///
/// **Public** - main entry point for output
///
/// # Arguments
/// * `grouped` - The two-level grouping from the aggregator
/// * `output_dir` - Directory to write reports into (created if absent)
///
/// # Returns
/// The paths of the files written. Existing files of the same name are
/// overwritten without warning.
///
/// # Errors
/// * `WriteError::CreateDirFailed` - The output directory cannot be created
/// * `WriteError::WriteFailed` - An I/O error while writing a report;
///   remaining writes are abandoned and already-written files stay on disk
pub fn write_summary_files(
    grouped: &GroupedRecords,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, WriteError> {
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir).map_err(|source| WriteError::CreateDirFailed {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(grouped.len());

    for (process_name, by_code) in grouped {
        let filename = format!("{}.{}", sanitize_process_name(process_name), OUTPUT_EXTENSION);
        let path = output_dir.join(filename);

        debug!("Writing report for {}: {}", process_name, path.display());

        write_process_report(&path, by_code)?;
        written.push(path);
    }

    info!("Wrote {} report files to {}", written.len(), output_dir.display());

    Ok(written)
}

/// Write the report file for a single process
///
/// **Private** - internal helper for write_summary_files
fn write_process_report(path: &Path, by_code: &HashMap<i32, Vec<Record>>) -> Result<(), WriteError> {
    let io_err = |source| WriteError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", OUTPUT_HEADER).map_err(io_err)?;

    // Event codes ascending; buckets themselves stay in input order
    let mut codes: Vec<i32> = by_code.keys().copied().collect();
    codes.sort_unstable();

    for code in codes {
        if let Some(row) = summarize_bucket(code, &by_code[&code]) {
            writeln!(writer, "{}", format_summary_line(&row)).map_err(io_err)?;
        }
    }

    writer.flush().map_err(io_err)
}

/// Format one summary row as a pipe-delimited output line
///
/// **Private** - internal formatting
fn format_summary_line(row: &SummaryRow) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        row.event_code,
        row.user_id,
        row.process_id,
        row.process_name,
        row.counter,
        row.first_timestamp
    )
}
