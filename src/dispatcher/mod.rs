// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Serializing dispatcher for the shared trie.
//!
//! The [`Dispatcher`] owns the one trie of the process behind one exclusive
//! lock. Every request is decoded, executed as exactly one trie operation
//! under the lock, and encoded after the lock is released. Readers and
//! writers contend for the same lock, so no caller ever observes a
//! half-applied mutation.
//!
//! # Example
//!
//! ```
//! use lanai_lib::dispatcher::Dispatcher;
//!
//! let dispatcher = Dispatcher::new();
//! assert_eq!(dispatcher.dispatch_raw(b"0foo").unwrap(), b"true".to_vec());
//! assert_eq!(dispatcher.dispatch_raw(b"0foo").unwrap(), b"false".to_vec());
//! assert_eq!(dispatcher.dispatch_raw(b"3f").unwrap(), br#"["foo"]"#.to_vec());
//! assert!(dispatcher.dispatch_raw(b"").is_err());
//! ```

mod command;
mod error;
mod reply;

use parking_lot::Mutex;
use tracing::debug;

use crate::data_structures::trie::{Trie, TrieResult};

pub use command::{Command, CommandCode, ASCII_ZERO};
pub use error::{DispatchError, DispatchResult};
pub use reply::Reply;

/// Dispatches commands to a trie and ensures they are applied one at a time,
/// in the order they reach the dispatcher.
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// The trie to which commands are dispatched
    trie: Mutex<Trie>,
}

impl Dispatcher {
    /// Creates a dispatcher around an empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_trie(Trie::new())
    }

    /// Creates a dispatcher that takes ownership of `trie`.
    pub fn with_trie(trie: Trie) -> Self {
        Self {
            trie: Mutex::new(trie),
        }
    }

    /// Decodes a raw request, executes it and returns the JSON-encoded reply.
    ///
    /// # Errors
    ///
    /// * `DispatchError::Protocol` - the request is malformed; the trie is untouched.
    /// * `DispatchError::Trie` - the trie rejected the argument.
    pub fn dispatch_raw(&self, message: &[u8]) -> DispatchResult<Vec<u8>> {
        let command = Command::decode(message)?;

        debug!(
            command = %command.code(),
            argument = %String::from_utf8_lossy(command.argument()),
            "dispatching command"
        );

        let reply = self.execute(command)?;
        Ok(reply.encode()?)
    }

    /// Executes one decoded command against the trie.
    pub fn execute(&self, command: Command<'_>) -> TrieResult<Reply> {
        match command {
            Command::Insert(key) => self.insert(key).map(Reply::Flag),
            Command::Delete(key) => self.delete(key).map(Reply::Flag),
            Command::Exists(key) => self.exists(key).map(Reply::Flag),
            Command::Completions(prefix) => self.completions(prefix).map(Reply::Keys),
            Command::Keys => Ok(Reply::Keys(self.keys())),
        }
    }

    /// Inserts a key, returning whether there was a change.
    pub fn insert(&self, key: &[u8]) -> TrieResult<bool> {
        self.trie.lock().insert(key)
    }

    /// Deletes a key, returning whether there was a change.
    pub fn delete(&self, key: &[u8]) -> TrieResult<bool> {
        self.trie.lock().remove(key)
    }

    /// Checks if a key exists.
    pub fn exists(&self, key: &[u8]) -> TrieResult<bool> {
        self.trie.lock().contains(key)
    }

    /// Gets the keys starting with `prefix`.
    pub fn completions(&self, prefix: &[u8]) -> TrieResult<Vec<Vec<u8>>> {
        self.trie.lock().completions(prefix)
    }

    /// Lists all keys.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.trie.lock().keys()
    }

    /// Number of stored keys. Not reachable over the wire.
    pub fn len(&self) -> usize {
        self.trie.lock().len()
    }

    /// Whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.trie.lock().is_empty()
    }
}
