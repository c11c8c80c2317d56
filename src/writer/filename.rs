//! Process name to report filename sanitization.

/// Sanitize a process name for use as a filename
///
/// Every character outside `[A-Za-z0-9.-]` becomes `_`. Two distinct
/// process names can sanitize to the same filename; the later write
/// then overwrites the earlier one (known limitation, no collision
/// detection).
pub fn sanitize_process_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
