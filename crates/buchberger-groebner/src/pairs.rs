//! Critical pairs and the FIFO worklist driving the saturation loop.

use std::collections::VecDeque;

/// A pair of basis indices whose S-polynomial still has to be reduced.
///
/// Indices refer to the engine's working basis, which only grows during
/// saturation, so they stay valid for the lifetime of the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CriticalPair {
    /// Index of the older basis element.
    pub i: usize,
    /// Index of the newer basis element.
    pub j: usize,
}

impl CriticalPair {
    /// Creates a new pair with `i < j`.
    #[must_use]
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j, "critical pair must be ordered: ({i}, {j})");
        Self { i, j }
    }
}

/// Breadth-first queue of pending critical pairs.
///
/// Every enqueued pair is dequeued exactly once.
#[derive(Clone, Debug, Default)]
pub struct PairQueue {
    pending: VecDeque<CriticalPair>,
    enqueued: usize,
    processed: usize,
}

impl PairQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue holding every unordered pair of `0..n`.
    #[must_use]
    pub fn all_pairs(n: usize) -> Self {
        let mut queue = Self::new();
        for i in 0..n {
            for j in (i + 1)..n {
                queue.push(CriticalPair::new(i, j));
            }
        }
        queue
    }

    /// Enqueues `(i, new)` for every `i < new`.
    pub fn extend_with(&mut self, new: usize) {
        for i in 0..new {
            self.push(CriticalPair::new(i, new));
        }
    }

    /// Enqueues a single pair.
    pub fn push(&mut self, pair: CriticalPair) {
        self.pending.push_back(pair);
        self.enqueued += 1;
    }

    /// Dequeues the oldest pending pair.
    pub fn pop(&mut self) -> Option<CriticalPair> {
        let pair = self.pending.pop_front()?;
        self.processed += 1;
        Some(pair)
    }

    /// Returns the number of pending pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no pairs are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the total number of pairs ever enqueued.
    #[must_use]
    pub fn enqueued(&self) -> usize {
        self.enqueued
    }

    /// Returns the number of pairs dequeued so far.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed
    }
}
