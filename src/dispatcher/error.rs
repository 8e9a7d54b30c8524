// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the dispatcher.

use thiserror::Error;

use crate::data_structures::trie::TrieError;
use crate::error::protocol::ProtocolError;

/// Result type for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors surfaced to the caller of [`super::Dispatcher::dispatch_raw`].
///
/// The rendered message of each variant is what the transport sends back
/// after the error status byte.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The request could not be decoded; the trie was not touched.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The trie rejected the argument.
    #[error(transparent)]
    Trie(#[from] TrieError),

    /// The reply could not be rendered as JSON.
    #[error("failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}
