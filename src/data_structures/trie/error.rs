//! Error types for the key trie.
//!
//! This module defines the error types that can occur during trie operations.

/// Errors that can occur in trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// Error when a key or prefix reaches the configured length limit.
    #[error("key is too long: {len} bytes (limit {max})")]
    KeyTooLong {
        /// Length of the rejected key in bytes.
        len: usize,
        /// Keys must be strictly shorter than this many bytes.
        max: usize,
    },
}
