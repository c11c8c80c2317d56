use crate::utils::config::{FIELD_DELIMITER, OUTPUT_HEADER};

/// Display the input and output column layout
pub fn display_format(show_details: bool) {
    println!("Event Summarizer file formats");
    println!("Field delimiter: '{}'", FIELD_DELIMITER);
    println!();

    if show_details {
        println!("Input line layout:");
        println!("  TIMESTAMP    - 64-bit integer, epoch-like");
        println!("  EVENT_CODE   - 32-bit integer identifier");
        println!("  USER_ID      - 32-bit integer");
        println!("  PROCESS_ID   - 32-bit integer");
        println!("  PROCESS_NAME - free-form text");
        println!("Lines starting with TIMESTAMP and blank lines are skipped.");
        println!();
        println!("Output report layout (one file per process):");
        println!("  {}", OUTPUT_HEADER);
        println!("  One line per event code, ascending; UID, PID and");
        println!("  FIRST_TIMESTAMP come from the bucket's earliest record.");
    } else {
        println!("Use --show for detailed format information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Event Summarizer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-process summary reports from pipe-delimited event logs.");
}
