use crate::event::LogEntry;
use crate::timestamp;

/// Why a single line failed to parse. Per-line failures are recoverable:
/// the caller warns and moves on to the next line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Fewer than four whitespace-delimited fields
    InvalidEntry,
    /// The date+time fields did not parse with the fixed format
    InvalidTime(chrono::ParseError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidEntry => write!(f, "invalid log entry"),
            ParseError::InvalidTime(e) => write!(f, "invalid log time: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parser for the fixed line grammar `<date> <time> <level> <message...>`.
pub struct LineParser;

impl LineParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one raw line into a [`LogEntry`].
    ///
    /// The line is split on the first three spaces only, so the message
    /// keeps its internal spaces untouched. The level is kept verbatim.
    pub fn parse(&self, line: &str) -> Result<LogEntry, ParseError> {
        let mut fields = line.splitn(4, ' ');
        let (date, time, level, message) = match (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) {
            (Some(d), Some(t), Some(l), Some(m)) => (d, t, l, m),
            _ => return Err(ParseError::InvalidEntry),
        };

        let ts = timestamp::parse_log_timestamp(&format!("{} {}", date, time))
            .map_err(ParseError::InvalidTime)?;

        Ok(LogEntry::new(ts, level.to_string(), message.to_string()))
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::format_log_timestamp;

    #[test]
    fn test_parse_valid_line() {
        let parser = LineParser::new();
        let entry = parser.parse("2024-01-01 10:00:00 INFO started ok").unwrap();

        assert_eq!(format_log_timestamp(&entry.timestamp), "2024-01-01 10:00:00");
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.message, "started ok");
    }

    #[test]
    fn test_message_keeps_internal_spaces() {
        let parser = LineParser::new();
        let entry = parser
            .parse("2024-01-01 10:00:00 info request handled in 123.45 ms")
            .unwrap();

        assert_eq!(entry.message, "request handled in 123.45 ms");
    }

    #[test]
    fn test_level_case_preserved() {
        let parser = LineParser::new();
        let entry = parser.parse("2024-01-01 10:00:00 WaRn odd level").unwrap();
        assert_eq!(entry.level, "WaRn");
    }

    #[test]
    fn test_too_few_fields() {
        let parser = LineParser::new();

        assert_eq!(parser.parse("bad line").unwrap_err(), ParseError::InvalidEntry);
        assert_eq!(
            parser.parse("2024-01-01 10:00:00 info").unwrap_err(),
            ParseError::InvalidEntry
        );
        assert_eq!(parser.parse("single").unwrap_err(), ParseError::InvalidEntry);
    }

    #[test]
    fn test_blank_line() {
        let parser = LineParser::new();
        assert_eq!(parser.parse("").unwrap_err(), ParseError::InvalidEntry);
    }

    #[test]
    fn test_unparsable_date() {
        let parser = LineParser::new();
        let err = parser.parse("not-a-date 10:00:00 info oops happened").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime(_)));
        assert!(err.to_string().starts_with("invalid log time"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::InvalidEntry.to_string(), "invalid log entry");
    }
}
