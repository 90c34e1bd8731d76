use crate::run::RunTracker;
use ahash::AHashMap as HashMap;
use std::collections::BTreeMap;
use std::hash::Hash;
use tracing::debug;

/// Descriptive statistics for a finite sequence.
///
/// A snapshot: it owns its numbers and keeps no reference to the sequence it
/// was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics<T: Hash + Eq> {
    /// Length of the analyzed sequence
    pub total_terms: usize,
    /// Occurrences of each symbol present
    pub counts: HashMap<T, usize>,
    /// Number of maximal runs
    pub num_runs: usize,
    /// Run length to number of runs having that length, ascending by length
    pub run_length_distribution: BTreeMap<usize, usize>,
}

impl<T: Hash + Eq> Statistics<T> {
    /// Returns how often `symbol` occurs; zero when absent.
    pub fn count(&self, symbol: &T) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Returns the share of terms equal to `symbol`, or 0.0 for an empty
    /// sequence.
    pub fn density(&self, symbol: &T) -> f64 {
        if self.total_terms == 0 {
            0.0
        } else {
            self.count(symbol) as f64 / self.total_terms as f64
        }
    }

    /// Returns true if the analyzed sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.total_terms == 0
    }
}

/// Computes symbol frequencies and run statistics in a single pass.
///
/// # Example
///
/// ```
/// use kolakoski::{analyze, generate, Symbol};
///
/// let stats = analyze(&generate(10));
/// assert_eq!(stats.num_runs, 7);
/// assert_eq!(stats.count(&Symbol::One), 5);
/// assert_eq!(stats.run_length_distribution.get(&2), Some(&3));
/// ```
pub fn analyze<T: Copy + Hash + Eq>(sequence: &[T]) -> Statistics<T> {
    let mut counts: HashMap<T, usize> = HashMap::default();
    let mut run_length_distribution = BTreeMap::new();
    let mut num_runs = 0;
    let mut tracker = RunTracker::new();

    let mut close = |length: usize| {
        *run_length_distribution.entry(length).or_insert(0) += 1;
        num_runs += 1;
    };

    for &symbol in sequence {
        *counts.entry(symbol).or_insert(0) += 1;
        if let Some(run) = tracker.push(symbol) {
            close(run.length);
        }
    }
    if let Some(run) = tracker.finish() {
        close(run.length);
    }

    debug!(
        terms = sequence.len(),
        runs = num_runs,
        "analyzed sequence"
    );

    Statistics {
        total_terms: sequence.len(),
        counts,
        num_runs,
        run_length_distribution,
    }
}
