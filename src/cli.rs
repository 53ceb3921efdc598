// CLI-specific types and structures
// This module contains the command-line interface definitions and parsing logic

use anyhow::Result;
use clap::Parser;

use crate::filter::{FilterConfig, FilterMode};
use crate::timestamp;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "logsum")]
#[command(about = "Summarise a plain-text log file: per-level counts, response times, message frequency")]
#[command(
    long_about = "Summarise a plain-text log file.\n\nEach line must match '<date> <time> <level> <message...>' with the timestamp\nformatted as 'YYYY-MM-DD HH:MM:SS'. Lines that do not parse are warned about\nand skipped.\n\nEXAMPLES:\n  logsum app.log\n  logsum app.log --levels info,warn,error\n  logsum app.log --since 2024-01-01T00:00:00 --until 2024-01-01T23:59:59\n  logsum app.log -o json --stats"
)]
#[command(version)]
pub struct Cli {
    /// Log file to analyse (extension must be .log or .txt)
    pub file: String,

    /// Comma-separated level names to aggregate (matched case-insensitively)
    #[arg(
        short = 'l',
        long = "levels",
        default_value = "info",
        value_delimiter = ',',
        help_heading = "Filter Options"
    )]
    pub levels: Vec<String>,

    /// Drop entries before this time (format: YYYY-MM-DDTHH:MM:SS)
    #[arg(long, help_heading = "Filter Options")]
    pub since: Option<String>,

    /// Drop entries after this time (format: YYYY-MM-DDTHH:MM:SS)
    #[arg(long, help_heading = "Filter Options")]
    pub until: Option<String>,

    /// Filter application mode. "passthrough" reproduces the legacy
    /// behaviour where filters are evaluated but nothing is dropped.
    #[arg(
        long = "filter-mode",
        value_enum,
        default_value = "enforce",
        help_heading = "Filter Options"
    )]
    pub filter_mode: FilterMode,

    /// Report output format
    #[arg(
        short = 'o',
        long = "output-format",
        value_enum,
        default_value = "text",
        help_heading = "Output Options"
    )]
    pub output_format: OutputFormat,

    /// Print processing statistics to stderr after the report
    #[arg(long, help_heading = "Output Options")]
    pub stats: bool,

    /// Suppress per-line parse warnings
    #[arg(short = 'q', long, help_heading = "Output Options")]
    pub quiet: bool,
}

/// Validate CLI argument combinations for early error detection
pub fn validate_cli_args(cli: &Cli) -> Result<()> {
    if cli.levels.iter().all(|l| l.trim().is_empty()) {
        return Err(anyhow::anyhow!("--levels requires at least one level name"));
    }
    Ok(())
}

impl Cli {
    /// Build the filter configuration, parsing the time bounds.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let since = self
            .since
            .as_deref()
            .map(timestamp::parse_flag_timestamp)
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid start time: {}", e))?;
        let until = self
            .until
            .as_deref()
            .map(timestamp::parse_flag_timestamp)
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid end time: {}", e))?;

        Ok(FilterConfig {
            levels: self
                .levels
                .iter()
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.trim().to_lowercase())
                .collect(),
            since,
            until,
            mode: self.filter_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["logsum", "app.log"]);
        assert_eq!(cli.levels, vec!["info"]);
        assert_eq!(cli.filter_mode, FilterMode::Enforce);
        assert_eq!(cli.output_format, OutputFormat::Text);
        assert!(!cli.stats);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_file_argument_required() {
        assert!(Cli::try_parse_from(["logsum"]).is_err());
    }

    #[test]
    fn test_levels_csv_split() {
        let cli = parse(&["logsum", "app.log", "--levels", "info,warn,ERROR"]);
        assert_eq!(cli.levels, vec!["info", "warn", "ERROR"]);

        let config = cli.filter_config().unwrap();
        assert_eq!(config.levels, vec!["info", "warn", "error"]);
    }

    #[test]
    fn test_empty_levels_rejected() {
        let cli = parse(&["logsum", "app.log", "--levels", ""]);
        assert!(validate_cli_args(&cli).is_err());
    }

    #[test]
    fn test_time_bounds_parsed() {
        let cli = parse(&[
            "logsum",
            "app.log",
            "--since",
            "2021-01-01T00:00:00",
            "--until",
            "2021-01-01T23:59:59",
        ]);
        let config = cli.filter_config().unwrap();
        assert!(config.since.is_some());
        assert!(config.until.is_some());
    }

    #[test]
    fn test_invalid_since_reported() {
        let cli = parse(&["logsum", "app.log", "--since", "2021-01-01 00:00:00"]);
        let err = cli.filter_config().unwrap_err();
        assert!(err.to_string().starts_with("invalid start time"));
    }

    #[test]
    fn test_filter_mode_passthrough() {
        let cli = parse(&["logsum", "app.log", "--filter-mode", "passthrough"]);
        assert_eq!(cli.filter_mode, FilterMode::Passthrough);
    }
}
