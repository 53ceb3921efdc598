use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::event::LogEntry;

pub const LEVEL_INFO: &str = "info";
pub const LEVEL_WARN: &str = "warn";
pub const LEVEL_ERROR: &str = "error";
pub const LEVEL_DEBUG: &str = "debug";

/// Running accumulator for the analysis pipeline.
///
/// Mutated once per accepted entry, read-only once the input is exhausted.
/// Entries with a level outside the four known ones count toward the total
/// but not toward any per-level bucket, so the bucket sum is <= the total.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    total_entries: usize,
    info: usize,
    warn: usize,
    error: usize,
    debug: usize,
    /// Response-time samples in milliseconds, append-only
    response_times: Vec<f64>,
    /// Exact-message counts. Insertion order is kept so ties on the
    /// most-frequent message resolve deterministically to the first-seen
    /// message (the reference tool's map traversal made this arbitrary).
    msg_frequency: IndexMap<String, usize>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: &LogEntry) {
        self.total_entries += 1;

        match entry.level.to_lowercase().as_str() {
            LEVEL_INFO => self.info += 1,
            LEVEL_WARN => self.warn += 1,
            LEVEL_ERROR => self.error += 1,
            LEVEL_DEBUG => self.debug += 1,
            _ => {}
        }

        // Messages like "request handled 123.45 ms" contribute a sample.
        // A suffix that fails to parse as a number is skipped silently.
        if let Some(stripped) = entry.message.strip_suffix(" ms") {
            if let Some(word) = stripped.split_whitespace().next_back() {
                if let Ok(n) = word.parse::<f64>() {
                    self.response_times.push(n);
                }
            }
        }

        *self.msg_frequency.entry(entry.message.clone()).or_insert(0) += 1;
    }

    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Arithmetic mean of the collected samples; None when there are none.
    pub fn avg_response_time(&self) -> Option<f64> {
        if self.response_times.is_empty() {
            return None;
        }
        Some(self.response_times.iter().sum::<f64>() / self.response_times.len() as f64)
    }

    /// The message with the highest occurrence count. Ties resolve to the
    /// first-seen message.
    pub fn most_frequent_message(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (msg, &count) in &self.msg_frequency {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((msg, count)),
            }
        }
        best.map(|(msg, _)| msg)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total_entries: self.total_entries,
            info: self.info,
            debug: self.debug,
            warn: self.warn,
            error: self.error,
            response_time_samples: self.response_times.len(),
            avg_response_time_ms: self.avg_response_time(),
            most_frequent_message: self.most_frequent_message().map(str::to_string),
        }
    }

    /// Fixed-format human-readable report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Total Log Entries: {}\n", self.total_entries));
        out.push_str(&format!("INFO: {}\n", self.info));
        out.push_str(&format!("DEBUG: {}\n", self.debug));
        out.push_str(&format!("WARN: {}\n", self.warn));
        out.push_str(&format!("ERROR: {}\n", self.error));

        if let Some(avg) = self.avg_response_time() {
            out.push_str(&format!("Average Response Time: {:.2} ms\n", avg));
        }

        if let Some(msg) = self.most_frequent_message() {
            out.push_str(&format!("Most frequent message: '{}'\n", msg));
        }

        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }
}

/// Serializable snapshot of a finished report, used for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_entries: usize,
    pub info: usize,
    pub debug: usize,
    pub warn: usize,
    pub error: usize,
    pub response_time_samples: usize,
    pub avg_response_time_ms: Option<f64>,
    pub most_frequent_message: Option<String>,
}
