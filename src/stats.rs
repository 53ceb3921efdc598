use std::time::{Duration, Instant};

/// Statistics collected during a pipeline run, reported on --stats.
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    pub lines_read: usize,
    pub entries_parsed: usize,
    pub parse_errors: usize,
    pub entries_filtered: usize,
    pub entries_aggregated: usize,
    pub processing_time: Duration,
    start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            entries_parsed: 0,
            parse_errors: 0,
            entries_filtered: 0,
            entries_aggregated: 0,
            processing_time: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_time = self.start_time.elapsed();
    }

    pub fn format_stats(&self) -> String {
        let mut output = format!(
            "Lines processed: {} total, {} parsed, {} errors; Entries: {} aggregated, {} filtered",
            self.lines_read,
            self.entries_parsed,
            self.parse_errors,
            self.entries_aggregated,
            self.entries_filtered
        );

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.lines_read > 0 {
            let lines_per_sec = (self.lines_read as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} lines/s)", lines_per_sec));
        }

        output
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
