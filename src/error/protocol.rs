//! Protocol error module.
//!
//! This module defines error types for malformed request messages and
//! malformed response frames. A protocol error is raised before the trie is
//! touched.

use thiserror::Error;

/// Errors that can occur while decoding wire messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Error when the message has no bytes at all.
    #[error("empty message")]
    EmptyMessage,

    /// Error when the command byte is not one of the known command codes.
    #[error("invalid command: {0}")]
    InvalidCommand(u8),

    /// Error when an argument is supplied to a command that takes none.
    #[error("unexpected argument: {0} command takes no arguments")]
    UnexpectedArgument(&'static str),

    /// Error when a response frame starts with an unknown status byte.
    #[error("invalid response status: {0}")]
    InvalidStatus(u8),
}
