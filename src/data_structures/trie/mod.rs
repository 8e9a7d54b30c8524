//! Key Trie Implementation
//!
//! This module provides a byte-indexed prefix tree that stores a set of keys
//! and answers membership and prefix-completion queries. Keys are raw byte
//! sequences; multi-byte characters are stored and matched byte by byte.
//!
//! The trie is not synchronized. Callers that share one across threads go
//! through [`crate::dispatcher::Dispatcher`], which serializes every
//! operation behind a single lock.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! assert!(trie.insert("foo").unwrap());
//! assert!(trie.insert("fo").unwrap());
//! assert!(!trie.insert("foo").unwrap());
//!
//! let mut completions = trie.completions("fo").unwrap();
//! completions.sort();
//! assert_eq!(completions, vec![b"fo".to_vec(), b"foo".to_vec()]);
//! ```

mod error;
mod node;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use error::TrieError;
pub use node::TrieNode;

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Default key length limit. Keys must be strictly shorter than this.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 256;

/// Configuration options for the trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Keys and prefixes of this many bytes or more are rejected. Bounds the
    /// recursion depth of every operation.
    pub max_key_length: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

/// A set of byte-string keys organized as a prefix tree.
///
/// For the keys `foo`, `fo`, `bar` and `baz` the tree looks like:
///
/// ```text
/// root
///  ├─ f ─ o* ─ o*
///  └─ b ─ a ─┬─ r*
///            └─ z*
/// ```
///
/// where `*` marks a terminal node. Finding every key that starts with `ba`
/// means walking `b`, `a` and enumerating the subtree below.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    /// The root node of the trie; terminal iff the empty key is stored
    root: TrieNode,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts a key into the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was not present and has been added.
    /// * `Ok(false)` - The key was already present; nothing changed.
    /// * `Err(TrieError::KeyTooLong)` - The key reaches the length limit.
    pub fn insert<K>(&mut self, key: K) -> TrieResult<bool>
    where
        K: AsRef<[u8]>,
    {
        let key = self.check_length(key.as_ref())?;
        Ok(self.root.insert(key))
    }

    /// Removes a key from the trie, pruning nodes that no longer lead to any
    /// stored key.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was present and has been removed.
    /// * `Ok(false)` - The key was absent; nothing changed.
    /// * `Err(TrieError::KeyTooLong)` - The key reaches the length limit.
    pub fn remove<K>(&mut self, key: K) -> TrieResult<bool>
    where
        K: AsRef<[u8]>,
    {
        let key = self.check_length(key.as_ref())?;
        Ok(self.root.remove(key))
    }

    /// Checks if a key is stored in the trie.
    ///
    /// A missing node anywhere along the path yields `Ok(false)`.
    pub fn contains<K>(&self, key: K) -> TrieResult<bool>
    where
        K: AsRef<[u8]>,
    {
        let key = self.check_length(key.as_ref())?;
        Ok(self.root.descend(key).is_some_and(TrieNode::is_terminal))
    }

    /// Returns every stored key that starts with `prefix`, the prefix itself
    /// included when it is stored.
    ///
    /// An unknown prefix yields an empty list. The empty prefix yields every
    /// key. Order is unspecified.
    pub fn completions<P>(&self, prefix: P) -> TrieResult<Vec<Vec<u8>>>
    where
        P: AsRef<[u8]>,
    {
        let prefix = self.check_length(prefix.as_ref())?;

        let Some(node) = self.root.descend(prefix) else {
            return Ok(Vec::new());
        };

        let mut keys = Vec::with_capacity(node.size());
        let mut path = prefix.to_vec();
        node.collect_keys(&mut path, &mut keys);

        Ok(keys)
    }

    /// Returns every stored key, in unspecified order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        let mut keys = Vec::with_capacity(self.root.size());
        self.root.collect_keys(&mut Vec::new(), &mut keys);
        keys
    }

    /// Returns the number of stored keys.
    ///
    /// This walks the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Checks if the trie holds no keys (and therefore no nodes).
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of nodes hanging off the root. Zero for an empty trie.
    pub fn node_count(&self) -> usize {
        self.root.descendants()
    }

    fn check_length<'k>(&self, key: &'k [u8]) -> TrieResult<&'k [u8]> {
        if key.len() >= self.config.max_key_length {
            return Err(TrieError::KeyTooLong {
                len: key.len(),
                max: self.config.max_key_length,
            });
        }

        Ok(key)
    }
}
