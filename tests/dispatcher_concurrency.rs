// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the dispatcher under concurrent callers.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use lanai_lib::dispatcher::Dispatcher;

const THREADS: usize = 8;
const KEYS_PER_THREAD: usize = 200;

fn key(thread: usize, index: usize) -> Vec<u8> {
    format!("t{thread}/k{index}").into_bytes()
}

#[test]
fn test_concurrent_inserts_are_all_applied() {
    let dispatcher = Arc::new(Dispatcher::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let dispatcher = Arc::clone(&dispatcher);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..KEYS_PER_THREAD {
                    let mut message = vec![b'0'];
                    message.extend(key(t, i));
                    assert_eq!(dispatcher.dispatch_raw(&message).unwrap(), b"true");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stored: HashSet<Vec<u8>> = dispatcher.keys().into_iter().collect();
    let expected: HashSet<Vec<u8>> = (0..THREADS)
        .flat_map(|t| (0..KEYS_PER_THREAD).map(move |i| key(t, i)))
        .collect();

    assert_eq!(dispatcher.len(), THREADS * KEYS_PER_THREAD);
    assert_eq!(stored, expected);
}

/// Every thread races to insert then delete the same key. Each successful
/// insert is matched by exactly one successful delete, so the key ends up
/// absent and the trie empty.
#[test]
fn test_contended_key_changes_are_counted_once() {
    let dispatcher = Arc::new(Dispatcher::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let dispatcher = Arc::clone(&dispatcher);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut inserted = 0usize;
                let mut deleted = 0usize;
                for _ in 0..KEYS_PER_THREAD {
                    if dispatcher.insert(b"shared").unwrap() {
                        inserted += 1;
                    }
                    if dispatcher.delete(b"shared").unwrap() {
                        deleted += 1;
                    }
                }
                (inserted, deleted)
            })
        })
        .collect();

    let (inserted, deleted) = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .fold((0, 0), |(i, d), (ti, td)| (i + ti, d + td));

    assert_eq!(inserted, deleted);
    assert!(inserted > 0);
    assert!(!dispatcher.exists(b"shared").unwrap());
    assert!(dispatcher.is_empty());
}

/// Readers running alongside writers only ever see whole keys.
#[test]
fn test_readers_never_observe_partial_keys() {
    let dispatcher = Arc::new(Dispatcher::new());
    let keys: Vec<Vec<u8>> = (0..KEYS_PER_THREAD)
        .map(|i| format!("prefix/{i:04}").into_bytes())
        .collect();
    let valid: Arc<HashSet<Vec<u8>>> = Arc::new(keys.iter().cloned().collect());

    let writer = {
        let dispatcher = Arc::clone(&dispatcher);
        thread::spawn(move || {
            for key in &keys {
                dispatcher.insert(key).unwrap();
            }
            for key in keys.iter().step_by(2) {
                dispatcher.delete(key).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..THREADS / 2)
        .map(|_| {
            let dispatcher = Arc::clone(&dispatcher);
            let valid = Arc::clone(&valid);
            thread::spawn(move || {
                for _ in 0..50 {
                    for key in dispatcher.completions(b"prefix/").unwrap() {
                        assert!(valid.contains(&key), "unexpected key {key:?}");
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(dispatcher.len(), KEYS_PER_THREAD / 2);
}
