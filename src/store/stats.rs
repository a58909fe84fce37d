//! Read Statistics Module
//!
//! Tracks how many record reads a store served, and how many of them missed.

// == Read Stats ==
/// Counters for `get` calls issued against a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Number of reads that found a record
    pub hits: u64,
    /// Number of reads for absent keys
    pub misses: u64,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total reads issued, hits and misses combined.
    pub fn gets(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }
}
