//! Sed-word pair discovery
//!
//! Two passes over the word list: the extractor picks out words that read as
//! substitutions, the aggregator masks every word with each candidate's
//! fragments, and selection turns hit keys with exactly two contributors
//! back into word pairs.

mod aggregator;
mod extractor;
mod selection;

pub use aggregator::{aggregate, aggregate_parallel};
pub use extractor::extract_candidates;
pub use selection::select_transforms;

use crate::core::{Candidate, MARKER, SENTINEL};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Candidates keyed by the word they were parsed from, in lexicographic order
pub type CandidateSet = BTreeMap<String, Candidate>;

/// Configuration for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub marker: char,
    pub sentinel: char,
    pub parallel: bool,
}

impl ScanConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: MARKER,
            sentinel: SENTINEL,
            parallel: false,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A pattern word together with the pair of words it turns into one another
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Transform {
    pub pattern: String,
    pub from: String,
    pub to: String,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.pattern, self.from, self.to)
    }
}

/// Counts gathered over a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub candidates: usize,
    pub hit_keys: usize,
    pub transforms: usize,
    pub duration: Duration,
}

/// Result of a full scan
pub struct ScanResult {
    pub transforms: Vec<Transform>,
    pub candidates: CandidateSet,
    pub summary: ScanSummary,
}

/// Run extraction, aggregation and selection over `words`
///
/// # Examples
/// ```
/// use sedwords::finder::{ScanConfig, find_transforms};
///
/// let words = ["bat", "cat", "cement", "statement"];
/// let result = find_transforms(&words, &ScanConfig::default());
///
/// assert_eq!(result.transforms.len(), 1);
/// assert_eq!(result.transforms[0].pattern, "statement");
/// assert_eq!(result.transforms[0].from, "cat");
/// assert_eq!(result.transforms[0].to, "cement");
/// ```
pub fn find_transforms<S: AsRef<str> + Sync>(words: &[S], config: &ScanConfig) -> ScanResult {
    let start = Instant::now();

    let mut candidates = extract_candidates(words, config.marker);
    tracing::debug!(
        lines = words.len(),
        candidates = candidates.len(),
        "extraction finished"
    );

    if config.parallel {
        aggregate_parallel(words, &mut candidates, config.sentinel);
    } else {
        aggregate(words, &mut candidates, config.sentinel);
    }

    let hit_keys: usize = candidates.values().map(|c| c.hit_counts().len()).sum();
    tracing::debug!(hit_keys, parallel = config.parallel, "aggregation finished");

    let transforms = select_transforms(&candidates, config.sentinel);

    let summary = ScanSummary {
        lines: words.len(),
        candidates: candidates.len(),
        hit_keys,
        transforms: transforms.len(),
        duration: start.elapsed(),
    };

    ScanResult {
        transforms,
        candidates,
        summary,
    }
}
