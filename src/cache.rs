//! Position cache for the search.
//!
//! Maps a position hash and an exact search depth to the best move and
//! score found there. An entry is never reused at a different depth.
//!
//! The cache belongs to a single search and is not synchronized; every
//! search builds its own.

use std::collections::HashMap;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// Classify a score searched inside the window `(alpha, beta)`.
    #[must_use]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
    pub bound: BoundType,
}

impl CacheEntry {
    /// True if the stored score answers a search with window `(alpha, beta)`.
    #[must_use]
    pub fn usable(&self, alpha: i32, beta: i32) -> bool {
        match self.bound {
            BoundType::Exact => true,
            BoundType::LowerBound => self.score >= beta,
            BoundType::UpperBound => self.score <= alpha,
        }
    }
}

#[derive(Debug, Default)]
pub struct PositionCache {
    entries: HashMap<(u64, u32), CacheEntry>,
}

impl PositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `hash` searched to exactly `depth`.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u32) -> Option<CacheEntry> {
        self.entries.get(&(hash, depth)).copied()
    }

    /// Store an entry, replacing any previous one at the same depth.
    pub fn store(&mut self, hash: u64, entry: CacheEntry) {
        self.entries.insert((hash, entry.depth), entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries from the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
