//! In-memory Store
//!
//! Keyspace held in process memory, behaving like the Redis backend:
//! values are JSON documents, key listing order is unspecified.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::models::Coffee;
use crate::store::{glob_match, CoffeeStore, ReadStats};

// == Memory Store ==
/// In-process implementation of [`CoffeeStore`].
///
/// Also supports failure injection so callers can exercise the
/// write-failure and mid-stream-failure paths without a real server.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key to JSON-encoded record
    entries: RwLock<HashMap<String, String>>,
    /// Read statistics
    stats: RwLock<ReadStats>,
    /// Number of upcoming `set` calls to reject
    failing_sets: AtomicUsize,
    /// Reject every `get` while set
    failing_gets: AtomicBool,
    /// Reject `flush_all` while set
    failing_flush: AtomicBool,
}

impl MemoryStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw payload under `key`, bypassing record encoding.
    pub async fn insert_raw(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.write().await.insert(key.into(), payload.into());
    }

    /// Removes `key`, returning true if it existed.
    pub async fn remove(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the read statistics.
    pub async fn stats(&self) -> ReadStats {
        self.stats.read().await.clone()
    }

    // == Failure Injection ==
    /// Rejects the next `count` calls to `set`.
    pub fn fail_next_sets(&self, count: usize) {
        self.failing_sets.store(count, Ordering::SeqCst);
    }

    /// Rejects every `get` until called again with `false`.
    pub fn fail_gets(&self, fail: bool) {
        self.failing_gets.store(fail, Ordering::SeqCst);
    }

    /// Rejects `flush_all` until called again with `false`.
    pub fn fail_flush(&self, fail: bool) {
        self.failing_flush.store(fail, Ordering::SeqCst);
    }

    fn take_set_failure(&self) -> bool {
        self.failing_sets
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl CoffeeStore for MemoryStore {
    async fn flush_all(&self) -> Result<()> {
        if self.failing_flush.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("FLUSHALL rejected".to_string()));
        }
        self.entries.write().await.clear();
        Ok(())
    }

    async fn set(&self, coffee: &Coffee) -> Result<()> {
        if self.take_set_failure() {
            return Err(StoreError::Connection(format!("SET {} rejected", coffee.id)));
        }
        let payload = coffee.to_json()?;
        self.entries.write().await.insert(coffee.id.clone(), payload);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Coffee>> {
        if self.failing_gets.load(Ordering::SeqCst) {
            return Err(StoreError::Connection(format!("GET {} rejected", key)));
        }

        let payload = self.entries.read().await.get(key).cloned();
        let mut stats = self.stats.write().await;
        match payload {
            Some(payload) => {
                stats.record_hit();
                Ok(Some(Coffee::from_json(&payload)?))
            }
            None => {
                stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }
}
