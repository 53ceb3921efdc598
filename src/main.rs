use anyhow::{bail, Result};
use clap::Parser;
use std::process;

mod cli;
mod event;
mod filter;
mod input;
mod parser;
mod pipeline;
mod report;
mod stats;
mod timestamp;

use cli::{Cli, OutputFormat};
use filter::EntryFilter;
use parser::LineParser;

/// Process exit codes
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    GeneralError = 1,
    InvalidUsage = 2,
}

impl ExitCode {
    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

fn main() {
    // clap itself exits with code 2 on malformed flags or a missing file
    // argument
    let cli = Cli::parse();

    if let Err(e) = cli::validate_cli_args(&cli) {
        eprintln!("logsum: error: {}", e);
        ExitCode::InvalidUsage.exit();
    }

    let filter_config = match cli.filter_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("logsum: error: {}", e);
            ExitCode::InvalidUsage.exit();
        }
    };

    if let Err(e) = run(&cli, filter_config) {
        eprintln!("logsum: error: {:#}", e);
        ExitCode::GeneralError.exit();
    }
}

fn run(cli: &Cli, filter_config: filter::FilterConfig) -> Result<()> {
    if !input::is_log_file(&cli.file) {
        bail!("{} is not a log file (expected .log or .txt)", cli.file);
    }

    let reader = input::open_log_file(&cli.file)?;
    let parser = LineParser::new();
    let entry_filter = EntryFilter::new(filter_config);

    let outcome = pipeline::run(reader, &parser, &entry_filter, cli.quiet)?;

    if outcome.stats.entries_parsed == 0 {
        bail!("no log entries found");
    }

    match cli.output_format {
        OutputFormat::Text => print!("{}", outcome.report.render_text()),
        OutputFormat::Json => println!("{}", outcome.report.render_json()?),
    }

    if cli.stats {
        eprintln!("logsum: {}", outcome.stats.format_stats());
    }

    Ok(())
}
