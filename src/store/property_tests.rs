//! Property-Based Tests for Store Module
//!
//! Uses proptest to check keyspace listing and glob matching behavior.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::models::Coffee;
use crate::store::{glob_match, CoffeeStore, MemoryStore, MATCH_ALL};

// == Strategies ==
/// Generates keys free of glob metacharacters
fn literal_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:_-]{1,32}"
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Listing with `*` returns exactly the distinct keys written, no matter
    // how many times a key was overwritten.
    #[test]
    fn prop_match_all_lists_every_key(keys in prop::collection::vec(literal_key_strategy(), 0..40)) {
        let listed = runtime().block_on(async {
            let store = MemoryStore::new();
            for key in &keys {
                store.set(&Coffee::with_id("Java", key.clone())).await.unwrap();
            }
            store.keys(MATCH_ALL).await.unwrap()
        });

        let expected: HashSet<String> = keys.into_iter().collect();
        prop_assert_eq!(listed.len(), expected.len(), "Listing contains duplicates");
        prop_assert_eq!(listed.into_iter().collect::<HashSet<_>>(), expected);
    }

    // A pattern without metacharacters matches only the identical key.
    #[test]
    fn prop_literal_pattern_matches_only_itself(a in literal_key_strategy(), b in literal_key_strategy()) {
        prop_assert!(glob_match(&a, &a));
        prop_assert_eq!(glob_match(&a, &b), a == b);
    }

    // A trailing star turns any literal into a prefix match.
    #[test]
    fn prop_prefix_star(prefix in literal_key_strategy(), suffix in "[a-z0-9]{0,16}") {
        let pattern = format!("{}*", prefix);
        let key = format!("{}{}", prefix, suffix);
        prop_assert!(glob_match(&pattern, &key));
    }

    // Flushing always leaves the keyspace empty.
    #[test]
    fn prop_flush_empties_store(keys in prop::collection::vec(literal_key_strategy(), 1..40)) {
        let remaining = runtime().block_on(async {
            let store = MemoryStore::new();
            for key in &keys {
                store.insert_raw(key.clone(), "{}").await;
            }
            store.flush_all().await.unwrap();
            store.keys(MATCH_ALL).await.unwrap()
        });
        prop_assert!(remaining.is_empty());
    }
}
