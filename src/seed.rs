//! Seeder
//!
//! Startup routine that clears the store and writes the fixed demo records.

use futures::future::join_all;
use tracing::{error, info};

use crate::error::{Result, StoreError};
use crate::models::Coffee;
use crate::store::{CoffeeStore, MATCH_ALL};

/// Names of the records written on every startup, in generation order.
pub const COFFEE_NAMES: [&str; 10] = [
    "Java",
    "Artcafe",
    "Domans",
    "Americana",
    "Kaldi",
    "Green Coffee",
    "Coffee inn",
    "Kahawa number moja",
    "Sasini",
    "Nescafe",
];

/// Flushes the store and writes one freshly identified record per name.
///
/// The flush completes before any write starts; the writes themselves run
/// concurrently. Each rejected write is logged and the call fails once all
/// writes have settled, leaving whatever was written in place.
///
/// Returns the records read back from the store afterwards.
pub async fn seed(store: &dyn CoffeeStore) -> Result<Vec<Coffee>> {
    store.flush_all().await?;
    info!("Store flushed");

    let coffees: Vec<Coffee> = COFFEE_NAMES.iter().map(|name| Coffee::new(*name)).collect();

    let results = join_all(coffees.iter().map(|coffee| store.set(coffee))).await;

    let mut failed = 0;
    for (coffee, result) in coffees.iter().zip(results) {
        if let Err(e) = result {
            failed += 1;
            error!("Failed to store {}: {}", coffee, e);
        }
    }

    if failed > 0 {
        return Err(StoreError::Seed {
            failed,
            total: coffees.len(),
        });
    }
    info!("Seeded {} records", coffees.len());

    let loaded = load_all(store).await?;
    for coffee in &loaded {
        info!("{}", coffee);
    }

    Ok(loaded)
}

/// Reads every record currently in the store, skipping keys that vanish
/// between listing and fetching.
pub async fn load_all(store: &dyn CoffeeStore) -> Result<Vec<Coffee>> {
    let keys = store.keys(MATCH_ALL).await?;
    let fetched = join_all(keys.iter().map(|key| store.get(key))).await;

    let mut coffees = Vec::with_capacity(keys.len());
    for coffee in fetched {
        if let Some(coffee) = coffee? {
            coffees.push(coffee);
        }
    }
    Ok(coffees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_seed_writes_all_names() {
        let store = MemoryStore::new();

        let seeded = seed(&store).await.unwrap();

        assert_eq!(seeded.len(), 10);
        assert_eq!(store.len().await, 10);
        let names: HashSet<&str> = seeded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, COFFEE_NAMES.into_iter().collect::<HashSet<&str>>());
    }

    #[tokio::test]
    async fn test_seed_ids_are_distinct_keys() {
        let store = MemoryStore::new();

        let seeded = seed(&store).await.unwrap();

        let ids: HashSet<String> = seeded.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), 10);
        let keys: HashSet<String> = store.keys(MATCH_ALL).await.unwrap().into_iter().collect();
        assert_eq!(keys, ids);
    }

    #[tokio::test]
    async fn test_seed_flushes_prior_keys() {
        let store = MemoryStore::new();
        store.insert_raw("session:42", "opaque").await;
        store.set(&Coffee::with_id("Stale", "old-id")).await.unwrap();

        seed(&store).await.unwrap();

        assert_eq!(store.len().await, 10);
        assert!(store.get("old-id").await.unwrap().is_none());
        assert!(!store.keys(MATCH_ALL).await.unwrap().contains(&"session:42".to_string()));
    }

    #[tokio::test]
    async fn test_reseed_replaces_records() {
        let store = MemoryStore::new();

        let first: HashSet<String> = seed(&store).await.unwrap().into_iter().map(|c| c.id).collect();
        let second: HashSet<String> = seed(&store).await.unwrap().into_iter().map(|c| c.id).collect();

        assert_eq!(store.len().await, 10);
        assert!(first.is_disjoint(&second));
    }

    #[tokio::test]
    async fn test_seed_flush_failure_aborts_before_writes() {
        let store = MemoryStore::new();
        store.insert_raw("kept", "opaque").await;
        store.fail_flush(true);

        let result = seed(&store).await;

        assert!(matches!(result, Err(StoreError::Connection(_))));
        assert_eq!(store.keys(MATCH_ALL).await.unwrap(), vec!["kept".to_string()]);
    }

    #[tokio::test]
    async fn test_seed_write_failure_leaves_partial_store() {
        let store = MemoryStore::new();
        store.fail_next_sets(3);

        let result = seed(&store).await;

        assert!(matches!(
            result,
            Err(StoreError::Seed {
                failed: 3,
                total: 10
            })
        ));
        assert_eq!(store.len().await, 7);
    }

    #[tokio::test]
    async fn test_load_all_skips_removed_keys() {
        let store = MemoryStore::new();
        store.set(&Coffee::with_id("Java", "a")).await.unwrap();
        store.set(&Coffee::with_id("Kaldi", "b")).await.unwrap();
        store.remove("a").await;

        let loaded = load_all(&store).await.unwrap();
        assert_eq!(loaded, vec![Coffee::with_id("Kaldi", "b")]);
    }
}
