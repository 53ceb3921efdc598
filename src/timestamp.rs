use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;

/// Timestamp format used inside log lines: `2024-01-01 10:00:00`
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format accepted by the --since/--until flags: `2024-01-01T10:00:00`
pub const FLAG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a log-line timestamp (second precision, no timezone, no
/// fractional seconds).
pub fn parse_log_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, LOG_TIME_FORMAT)
}

/// Format a timestamp back into the log-line representation.
/// Round-trips with [`parse_log_timestamp`] for any valid input.
pub fn format_log_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(LOG_TIME_FORMAT).to_string()
}

/// Parse a --since/--until flag value.
pub fn parse_flag_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, FLAG_TIME_FORMAT)
        .map_err(|e| anyhow!("invalid timestamp '{}' (expected YYYY-MM-DDTHH:MM:SS): {}", s, e))
}
