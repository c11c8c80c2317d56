//! Event Summarizer CLI
//!
//! Reads a pipe-delimited event log, groups records by process name and
//! event code, and writes one summary report file per process.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use event_summarizer::commands::{
    display_format, display_version, execute_summarize, inspect_log_file, validate_args,
    SummarizeArgs, SummarizeOutcome,
};
use event_summarizer::utils::error::{exit_code_for, ReadError, EXIT_IO, EXIT_NOT_FOUND};

/// Event Summarizer - per-process reports from pipe-delimited event logs
#[derive(Parser, Debug)]
#[command(name = "event-summarizer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize an event log into per-process report files
    Summarize {
        /// Path to the input event log
        #[arg(short, long, env = "EVENT_LOG_INPUT")]
        input: PathBuf,

        /// Directory to write summary reports into
        #[arg(short, long, env = "EVENT_LOG_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,
    },

    /// Count valid, header, and malformed lines in an event log
    Inspect {
        /// Path to the event log to inspect
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display the input and output file formats
    Format {
        /// Show full format details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command; every run prints exactly one outcome message
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => report_failure(&err),
    };

    process::exit(exit_code);
}

/// Dispatch the selected command
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summarize { input, output_dir } => {
            let args = SummarizeArgs { input, output_dir };

            // Validate args first
            validate_args(&args)?;

            match execute_summarize(&args)? {
                SummarizeOutcome::Written { files, output_dir } => {
                    println!(
                        "Summary files generated in: {} ({} files)",
                        output_dir.display(),
                        files.len()
                    );
                }
                SummarizeOutcome::NoValidEvents => {
                    println!("No valid events were read from the input file.");
                }
            }
        }

        Commands::Inspect { file } => {
            inspect_log_file(file)?;
        }

        Commands::Format { show } => {
            display_format(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Print the failure diagnostic for its class
///
/// **Private** - the exit code itself comes from `exit_code_for`
fn report_failure(err: &anyhow::Error) -> i32 {
    match exit_code_for(err) {
        EXIT_NOT_FOUND => {
            // Diagnostic names the attempted path
            if let Some(read_err) = err.downcast_ref::<ReadError>() {
                eprintln!("ERROR: {}", read_err);
            }
            EXIT_NOT_FOUND
        }
        EXIT_IO => {
            eprintln!("ERROR: I/O failure while processing files: {:#}", err);
            EXIT_IO
        }
        other => {
            eprintln!("ERROR: unexpected failure: {:?}", err);
            other
        }
    }
}
