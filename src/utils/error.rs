//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the input event log
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error while reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while writing summary reports
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

// Exit codes: one per failure class. No-data is a successful outcome (0).
pub const EXIT_UNEXPECTED: i32 = 1;
pub const EXIT_NOT_FOUND: i32 = 2;
pub const EXIT_IO: i32 = 3;

/// Pick the exit code for a failure
///
/// **Public** - called by main.rs after printing the diagnostic.
/// File-not-found, generic I/O, and unexpected failures each get a
/// distinct code so scripts can tell them apart. Walks the anyhow
/// chain, so context wrapping does not hide the typed error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(read_err) = err.downcast_ref::<ReadError>() {
        return match read_err {
            ReadError::NotFound { .. } => EXIT_NOT_FOUND,
            ReadError::Io(_) => EXIT_IO,
        };
    }

    if err.downcast_ref::<WriteError>().is_some() {
        return EXIT_IO;
    }

    EXIT_UNEXPECTED
}
