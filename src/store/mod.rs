//! Store Module
//!
//! Store client abstraction over a Redis-compatible key-value service.
//!
//! # Backends
//! - `RedisStore`: multiplexed connection to a Redis server
//! - `MemoryStore`: in-process keyspace with the same contract

mod glob;
mod memory;
mod redis_store;
mod stats;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Coffee;

// Re-export public types
pub use self::glob::glob_match;
pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;
pub use self::stats::ReadStats;

/// Pattern matching every key.
pub const MATCH_ALL: &str = "*";

/// Shared handle to a store, cloned into the seeder and every request.
pub type SharedStore = Arc<dyn CoffeeStore>;

// == Store Client Trait ==
/// Access to the keyspace holding coffee records.
///
/// Implementations must be safe to call concurrently from many tasks
/// without external locking.
#[async_trait]
pub trait CoffeeStore: Send + Sync {
    /// Deletes every key in the store.
    async fn flush_all(&self) -> Result<()>;

    /// Stores `coffee` as JSON under its id, overwriting any previous value.
    async fn set(&self, coffee: &Coffee) -> Result<()>;

    /// Fetches the record stored under `key`, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<Coffee>>;

    /// Lists all keys matching a glob `pattern`, in store-defined order.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}
