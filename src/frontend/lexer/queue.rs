//! Buffered lookahead queue
//!
//! Wraps a pull-based [`Source`] and keeps every produced-but-unconsumed item,
//! so callers can look arbitrarily far ahead without backtracking. The lexer
//! stacks two of these: one over input characters and one over tokens, whose
//! source is the scanner itself.

use std::collections::VecDeque;

/// A pull-based producer. Each call yields the next item of the sequence.
///
/// Sources may mutate their own state while producing (the scanner advances
/// its line and column counters), but are never asked twice for the same
/// position.
pub trait Source {
    type Item;

    fn next_item(&mut self) -> Self::Item;
}

/// Source backed by a closure, see [`from_fn`]
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Turn a closure into a [`Source`]
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> T,
{
    FromFn(f)
}

impl<T, F> Source for FromFn<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn next_item(&mut self) -> T {
        (self.0)()
    }
}

/// Lookahead queue over a [`Source`].
///
/// Index 0 is always the next unconsumed item. Items are produced lazily, in
/// order, and never reordered or dropped before they are skipped.
#[derive(Debug)]
pub struct BufferedQueue<S: Source> {
    source: S,
    buffer: VecDeque<S::Item>,
}

impl<S: Source> BufferedQueue<S>
where
    S::Item: Clone,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: VecDeque::new(),
        }
    }

    /// Next unconsumed item
    #[inline]
    pub fn peek(&mut self) -> S::Item {
        self.peek_nth(0)
    }

    /// Item `n` positions past the head, producing the missing prefix first
    pub fn peek_nth(
        &mut self,
        n: usize,
    ) -> S::Item {
        self.fill(n);
        self.buffer[n].clone()
    }

    /// Consume the next item
    #[inline]
    pub fn skip(&mut self) {
        self.skip_nth(0)
    }

    /// Consume the first `n + 1` items
    pub fn skip_nth(
        &mut self,
        n: usize,
    ) {
        self.fill(n);
        self.buffer.drain(..=n);
    }

    /// Number of produced items not yet consumed
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Drop the queue, discarding any buffered items
    pub fn into_source(self) -> S {
        self.source
    }

    fn fill(
        &mut self,
        n: usize,
    ) {
        while self.buffer.len() <= n {
            let item = self.source.next_item();
            self.buffer.push_back(item);
        }
    }
}
