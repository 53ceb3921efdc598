use chrono::NaiveDateTime;
use serde::Serialize;

/// One structured record extracted from a log line.
///
/// Created by the parser, never mutated afterwards. The level is kept
/// verbatim (case as written); case-insensitive matching happens at the
/// filtering and aggregation stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, level: String, message: String) -> Self {
        Self {
            timestamp,
            level,
            message,
        }
    }
}
