use std::io::BufRead;

use anyhow::Result;

use crate::filter::{EntryFilter, FilterVerdict};
use crate::parser::LineParser;
use crate::report::AnalysisReport;
use crate::stats::ProcessingStats;

/// Result of a pipeline run: the finished report plus processing stats.
pub struct PipelineOutcome {
    pub report: AnalysisReport,
    pub stats: ProcessingStats,
}

/// Run the parse -> filter -> aggregate pipeline over the input.
///
/// Single pass: each line is parsed, filtered, and accumulated before the
/// next is read, so memory use is independent of file size. A line that
/// fails to parse is warned to stderr (unless quiet) and skipped;
/// processing continues with the next line.
pub fn run<R: BufRead>(
    reader: R,
    parser: &LineParser,
    filter: &EntryFilter,
    quiet: bool,
) -> Result<PipelineOutcome> {
    let mut report = AnalysisReport::new();
    let mut stats = ProcessingStats::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        stats.lines_read += 1;

        let entry = match parser.parse(&line) {
            Ok(entry) => entry,
            Err(e) => {
                stats.parse_errors += 1;
                if !quiet {
                    eprintln!("logsum: line {}: {}", idx + 1, e);
                }
                continue;
            }
        };
        stats.entries_parsed += 1;

        match filter.verdict(&entry) {
            FilterVerdict::Exclude => stats.entries_filtered += 1,
            FilterVerdict::Keep => {
                report.add(&entry);
                stats.entries_aggregated += 1;
            }
        }
    }

    stats.finish();
    Ok(PipelineOutcome { report, stats })
}
