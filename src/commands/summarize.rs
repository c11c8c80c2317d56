//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Reads the event log into records
//! 2. Short-circuits if no valid records were found
//! 3. Groups records by process name and event code
//! 4. Writes one summary report per process

use crate::aggregator::group_by_process_and_code;
use crate::reader::read_events;
use crate::writer::write_summary_files;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Path to the input event log
    pub input: PathBuf,

    /// Directory to write summary reports into
    pub output_dir: PathBuf,
}

/// Outcome of a summarize run
///
/// The orchestrator reports exactly one of these to the user.
#[derive(Debug)]
pub enum SummarizeOutcome {
    /// Reports were written
    Written {
        files: Vec<PathBuf>,
        output_dir: PathBuf,
    },

    /// The input contained no valid records; nothing was written
    NoValidEvents,
}

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Summarize command arguments
///
/// # Returns
/// The run outcome; `NoValidEvents` is a successful outcome, not an error.
///
/// # Errors
/// * `ReadError` - Input file missing or unreadable
/// * `WriteError` - Output directory or report files unwritable
///   (already-written reports stay on disk)
pub fn execute_summarize(args: &SummarizeArgs) -> Result<SummarizeOutcome> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading event log...");
    let records = read_events(&args.input)
        .with_context(|| format!("Failed to read event log {}", args.input.display()))?;

    if records.is_empty() {
        info!("No valid records in input, nothing to write");
        return Ok(SummarizeOutcome::NoValidEvents);
    }

    debug!("Read {} valid records", records.len());

    info!("Step 2/3: Grouping records by process and event code...");
    let grouped = group_by_process_and_code(records);

    info!("Step 3/3: Writing summary reports...");
    let files = write_summary_files(&grouped, &args.output_dir)
        .context("Failed to write summary reports")?;

    let elapsed = start_time.elapsed();
    info!("Summarize completed in {:.2}s", elapsed.as_secs_f64());

    Ok(SummarizeOutcome::Written {
        files,
        output_dir: args.output_dir.clone(),
    })
}

/// Validate summarize arguments
///
/// **Public** - called before execute_summarize for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    if args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    Ok(())
}
