//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod summarize;
pub mod utils;

// Re-export main command functions
pub use inspect::{census_log_file, inspect_log_file, LineCensus};
pub use summarize::{execute_summarize, validate_args, SummarizeArgs, SummarizeOutcome};
pub use utils::{display_format, display_version};
