/// A maximal block of one repeated symbol.
///
/// Covers positions `start..start + length`; the neighbours on either side,
/// when present, hold a different symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<T> {
    pub symbol: T,
    pub start: usize,
    pub length: usize,
}

impl<T> Run<T> {
    /// Index one past the last position of the run.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Run-segmentation state machine.
///
/// Starts with no current run. Each pushed symbol either extends the current
/// run or closes it and opens a new one; [`finish`](Self::finish) closes
/// whatever run is still open at end of input.
#[derive(Debug, Clone)]
pub struct RunTracker<T> {
    current: Option<Run<T>>,
    /// Index the next pushed symbol will occupy
    position: usize,
}

impl<T: Copy + Eq> RunTracker<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            position: 0,
        }
    }

    /// Feeds the next symbol, returning the run it closed, if any.
    pub fn push(&mut self, symbol: T) -> Option<Run<T>> {
        let position = self.position;
        self.position += 1;

        match self.current.as_mut() {
            Some(run) if run.symbol == symbol => {
                run.length += 1;
                None
            }
            _ => self.current.replace(Run {
                symbol,
                start: position,
                length: 1,
            }),
        }
    }

    /// Closes and returns the open run, leaving the tracker idle.
    pub fn finish(&mut self) -> Option<Run<T>> {
        self.current.take()
    }

    /// Returns the run still being extended.
    pub fn current(&self) -> Option<&Run<T>> {
        self.current.as_ref()
    }
}

impl<T: Copy + Eq> Default for RunTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator adapter yielding the maximal runs of the wrapped symbols.
pub struct Runs<I: Iterator> {
    inner: I,
    tracker: RunTracker<I::Item>,
    done: bool,
}

impl<I> Iterator for Runs<I>
where
    I: Iterator,
    I::Item: Copy + Eq,
{
    type Item = Run<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for symbol in self.inner.by_ref() {
            if let Some(closed) = self.tracker.push(symbol) {
                return Some(closed);
            }
        }

        self.done = true;
        self.tracker.finish()
    }
}

/// Segments `symbols` into maximal runs, left to right.
///
/// ```
/// use kolakoski::runs;
///
/// let lengths: Vec<usize> = runs("aabccc".chars()).map(|r| r.length).collect();
/// assert_eq!(lengths, vec![2, 1, 3]);
/// ```
pub fn runs<I>(symbols: I) -> Runs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Copy + Eq,
{
    Runs {
        inner: symbols.into_iter(),
        tracker: RunTracker::new(),
        done: false,
    }
}
