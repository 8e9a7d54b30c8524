//! Data structures for the Lanai server.

pub mod trie;

pub use trie::{Trie, TrieConfig, TrieError, TrieResult};
