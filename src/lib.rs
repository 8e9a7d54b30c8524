//! Lanai Library
//!
//! This library contains the core components of the Lanai server: the
//! byte-keyed trie, the dispatcher that serializes access to it, the wire
//! protocol and the HTTP and WebSocket transport. The library is designed to
//! be used by the binary crate, but the trie and dispatcher can also be
//! embedded directly.
//!
//! # Architecture
//!
//! ```text
//! transport (server) ──> dispatcher ──> trie
//!        │                   │
//!        └── protocol frame ─┘
//! ```
//!
//! The dispatcher owns the only trie of the process and applies one command
//! at a time. Transports never touch the trie directly.

pub mod config;
pub mod data_structures;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod server;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
