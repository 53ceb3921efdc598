use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::event::LogEntry;

/// A predicate marks an entry for exclusion: true means "drop this entry".
/// Predicates are pure functions of the entry and the captured config.
pub type FilterPredicate = Box<dyn Fn(&LogEntry) -> bool>;

/// How the predicate chain is applied.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum FilterMode {
    /// Excluded entries are dropped before aggregation (short-circuits on
    /// the first matching predicate).
    #[default]
    Enforce,
    /// Compatibility mode reproducing the reference tool's filter chain,
    /// which evaluated every predicate but never acted on the result. All
    /// entries reach the aggregator regardless of configuration.
    Passthrough,
}

/// Outcome of running an entry through the filter chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterVerdict {
    Keep,
    Exclude,
}

/// Filter configuration assembled by the CLI layer.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Lower-cased level names; always has at least one member (default "info")
    pub levels: Vec<String>,
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub mode: FilterMode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            levels: vec!["info".to_string()],
            since: None,
            until: None,
            mode: FilterMode::Enforce,
        }
    }
}

/// The assembled predicate chain. Predicates compose via logical OR: an
/// entry is excluded if any predicate returns true.
pub struct EntryFilter {
    predicates: Vec<FilterPredicate>,
    mode: FilterMode,
}

impl EntryFilter {
    pub fn new(config: FilterConfig) -> Self {
        let mut predicates: Vec<FilterPredicate> = Vec::with_capacity(3);

        let levels: HashSet<String> = config
            .levels
            .iter()
            .map(|l| l.trim().to_lowercase())
            .collect();
        predicates.push(Box::new(move |entry: &LogEntry| {
            !levels.contains(&entry.level.to_lowercase())
        }));

        if let Some(since) = config.since {
            predicates.push(Box::new(move |entry: &LogEntry| entry.timestamp < since));
        }
        if let Some(until) = config.until {
            predicates.push(Box::new(move |entry: &LogEntry| entry.timestamp > until));
        }

        Self {
            predicates,
            mode: config.mode,
        }
    }

    /// Run the entry through the chain.
    pub fn verdict(&self, entry: &LogEntry) -> FilterVerdict {
        match self.mode {
            FilterMode::Enforce => {
                if self.predicates.iter().any(|excludes| excludes(entry)) {
                    FilterVerdict::Exclude
                } else {
                    FilterVerdict::Keep
                }
            }
            FilterMode::Passthrough => {
                // Evaluate every predicate but discard the results, exactly
                // like the original chain did.
                for excludes in &self.predicates {
                    let _ = excludes(entry);
                }
                FilterVerdict::Keep
            }
        }
    }
}
