use crate::symbol::Symbol;
use tracing::{debug, trace};

/// Fixed prefix the self-expansion starts from.
pub const SEED: [Symbol; 3] = [Symbol::One, Symbol::Two, Symbol::Two];

/// Index of the first seed term that dictates a run not already in the seed.
const SEED_CURSOR: usize = 2;

/// Lazy, unbounded Kolakoski sequence.
///
/// The sequence describes itself: the term under the read cursor is the
/// length of the next run to append, and each appended run uses the symbol
/// opposite to the current last term. Generated terms stay buffered because
/// the cursor reads them back.
///
/// # Example
///
/// ```
/// use kolakoski::{generate, Kolakoski};
///
/// let lazy: Vec<_> = Kolakoski::new().take(10).collect();
/// assert_eq!(lazy, generate(10));
/// ```
#[derive(Debug, Clone)]
pub struct Kolakoski {
    /// Every term produced so far
    terms: Vec<Symbol>,
    /// Position whose value is the length of the next run
    cursor: usize,
    /// Number of terms already yielded by the iterator
    emitted: usize,
}

impl Kolakoski {
    /// Creates a generator holding only the seed.
    pub fn new() -> Self {
        Self {
            terms: SEED.to_vec(),
            cursor: SEED_CURSOR,
            emitted: 0,
        }
    }

    /// Appends the run described by the term under the cursor.
    fn expand(&mut self) {
        // The cursor trails the end of the buffer: every step adds at least
        // one term and moves the cursor by exactly one.
        let run_len = self.terms[self.cursor].run_length();
        let next = match self.terms.last() {
            Some(last) => last.flip(),
            None => Symbol::One,
        };

        trace!(cursor = self.cursor, symbol = %next, run_len, "expanding");

        self.terms.extend(std::iter::repeat(next).take(run_len));
        self.cursor += 1;
    }

    /// Returns the terms generated so far, including ones not yet yielded.
    pub fn buffered(&self) -> &[Symbol] {
        &self.terms
    }
}

impl Default for Kolakoski {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Kolakoski {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == self.terms.len() {
            self.expand();
        }

        let term = self.terms[self.emitted];
        self.emitted += 1;
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Returns the first `n` terms of the Kolakoski sequence.
///
/// Pure and deterministic; runs in time and space linear in `n`.
/// `n == 0` yields an empty sequence.
pub fn generate(n: usize) -> Vec<Symbol> {
    let mut kolakoski = Kolakoski::new();
    let mut expansions = 0usize;

    while kolakoski.terms.len() < n {
        kolakoski.expand();
        expansions += 1;
    }

    let mut terms = kolakoski.terms;
    terms.truncate(n);

    debug!(terms = n, expansions, "generated kolakoski prefix");
    terms
}
