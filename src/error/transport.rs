//! Transport error module.
//!
//! This module defines error types that may occur in the HTTP and WebSocket
//! transport.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur during transport operations.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error when the listening socket cannot be bound.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// The address that could not be bound
        address: SocketAddr,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error when the server loop fails while serving connections.
    #[error("Server error: {0}")]
    Serve(#[source] io::Error),

    /// Error when the local address of the listener cannot be read.
    #[error("Failed to read local address: {0}")]
    LocalAddr(#[source] io::Error),

    /// Error when receiving a message over WebSocket.
    #[error("WebSocket receive error: {0}")]
    WebSocketReceiveError(String),

    /// Error when sending a message over WebSocket.
    #[error("WebSocket send error: {0}")]
    WebSocketSendError(String),
}
