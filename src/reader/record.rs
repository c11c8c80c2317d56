//! The event record value type.

/// One parsed line of the input event log
///
/// Immutable once constructed; records are created only by the reader
/// and carry no identity beyond their field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Epoch-like timestamp of the event
    pub timestamp: i64,

    /// Numeric event code identifier
    pub event_code: i32,

    /// Id of the user that triggered the event
    pub user_id: i32,

    /// Id of the process that emitted the event
    pub process_id: i32,

    /// Process name, free-form text
    pub process_name: String,
}

impl Record {
    pub fn new(
        timestamp: i64,
        event_code: i32,
        user_id: i32,
        process_id: i32,
        process_name: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            event_code,
            user_id,
            process_id,
            process_name: process_name.into(),
        }
    }
}
