// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the key trie.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::data_structures::trie::{Trie, TrieError, DEFAULT_MAX_KEY_LENGTH};
use crate::tests::test_utils::{key_set_strategy, key_strategy};

fn build(keys: &HashSet<Vec<u8>>) -> Trie {
    let mut trie = Trie::new();
    for key in keys {
        trie.insert(key).unwrap();
    }
    trie
}

proptest! {
    // Property: a second insert of the same key reports no change
    #[test]
    fn prop_insert_is_idempotent(keys in key_set_strategy(), key in key_strategy()) {
        let mut trie = build(&keys);
        let fresh = !keys.contains(&key);

        prop_assert_eq!(trie.insert(&key), Ok(fresh));
        prop_assert_eq!(trie.insert(&key), Ok(false));
        prop_assert_eq!(trie.contains(&key), Ok(true));
    }

    // Property: removing an absent key changes nothing
    #[test]
    fn prop_remove_absent_is_no_op(keys in key_set_strategy(), key in key_strategy()) {
        prop_assume!(!keys.contains(&key));
        let mut trie = build(&keys);
        let before: HashSet<Vec<u8>> = trie.keys().into_iter().collect();
        let nodes = trie.node_count();

        prop_assert_eq!(trie.remove(&key), Ok(false));

        let after: HashSet<Vec<u8>> = trie.keys().into_iter().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(trie.node_count(), nodes);
    }

    // Property: insert followed by remove restores the previous shape
    #[test]
    fn prop_insert_remove_inverse(keys in key_set_strategy(), key in key_strategy()) {
        prop_assume!(!keys.contains(&key));
        let mut trie = build(&keys);
        let nodes = trie.node_count();
        let size = trie.len();

        prop_assert_eq!(trie.insert(&key), Ok(true));
        prop_assert_eq!(trie.remove(&key), Ok(true));

        prop_assert_eq!(trie.contains(&key), Ok(false));
        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert_eq!(trie.len(), size);
    }

    // Property: completions are exactly the stored keys starting with the prefix
    #[test]
    fn prop_completions_match_filter(keys in key_set_strategy(), prefix in key_strategy()) {
        let trie = build(&keys);

        let expected: HashSet<Vec<u8>> = keys
            .iter()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();
        let completions = trie.completions(&prefix).unwrap();
        let actual: HashSet<Vec<u8>> = completions.iter().cloned().collect();

        prop_assert_eq!(completions.len(), actual.len());
        prop_assert_eq!(actual, expected);
    }

    // Property: keys() enumerates the stored set and len() counts it
    #[test]
    fn prop_keys_enumerate_the_set(keys in key_set_strategy()) {
        let trie = build(&keys);
        let listed: HashSet<Vec<u8>> = trie.keys().into_iter().collect();

        prop_assert_eq!(trie.len(), keys.len());
        prop_assert_eq!(listed, keys);
    }

    // Property: removing every key leaves no nodes behind
    #[test]
    fn prop_removing_everything_prunes_all(keys in key_set_strategy()) {
        let mut trie = build(&keys);
        for key in &keys {
            prop_assert_eq!(trie.remove(key), Ok(true));
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 0);
    }

    // Property: over-long arguments fail and never mutate the trie
    #[test]
    fn prop_length_bound_rejects(
        keys in key_set_strategy(),
        extra in 0usize..64,
        byte in any::<u8>(),
    ) {
        let mut trie = build(&keys);
        let long = vec![byte; DEFAULT_MAX_KEY_LENGTH + extra];
        let nodes = trie.node_count();
        let expected = Err(TrieError::KeyTooLong {
            len: long.len(),
            max: DEFAULT_MAX_KEY_LENGTH,
        });

        prop_assert_eq!(trie.insert(&long), expected.clone());
        prop_assert_eq!(trie.remove(&long), expected.clone());
        prop_assert_eq!(trie.contains(&long), expected.clone());
        prop_assert_eq!(trie.completions(&long).map(|_| false), expected);
        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert_eq!(trie.len(), keys.len());
    }
}
