//! Output writers for summary report files.
//!
//! This module handles:
//! - Sanitizing process names into filenames
//! - Writing one pipe-delimited report per process

pub mod filename;
pub mod report;

// Re-export main functions
pub use filename::sanitize_process_name;
pub use report::write_summary_files;
