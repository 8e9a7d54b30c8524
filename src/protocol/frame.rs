// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Status-prefixed response frames.

use crate::dispatcher::DispatchResult;
use crate::error::protocol::ProtocolError;

/// First byte of a successful response.
pub const STATUS_SUCCESS: u8 = b's';

/// First byte of a failed response.
pub const STATUS_ERROR: u8 = b'e';

/// A response as seen at the transport boundary.
///
/// Callers tell success from failure by the first byte alone: `s` followed
/// by the JSON-encoded result, or `e` followed by the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFrame {
    /// JSON-encoded result of the command.
    Success(Vec<u8>),
    /// Human-readable error message.
    Error(String),
}

impl ResponseFrame {
    /// Builds the frame for a dispatcher outcome, leaving the outcome with
    /// the caller so a failure can still be reported.
    pub fn from_result(result: &DispatchResult<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => ResponseFrame::Success(payload.clone()),
            Err(err) => ResponseFrame::Error(err.to_string()),
        }
    }

    /// Whether this frame carries a success status.
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseFrame::Success(_))
    }

    /// Renders the frame in wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let (status, payload) = match self {
            ResponseFrame::Success(payload) => (STATUS_SUCCESS, payload.as_slice()),
            ResponseFrame::Error(message) => (STATUS_ERROR, message.as_bytes()),
        };

        let mut bytes = Vec::with_capacity(1 + payload.len());
        bytes.push(status);
        bytes.extend_from_slice(payload);
        bytes
    }

    /// Parses a frame in wire form.
    pub fn parse(bytes: &[u8]) -> Result<Self, ProtocolError> {
        match bytes.split_first() {
            None => Err(ProtocolError::EmptyMessage),
            Some((&STATUS_SUCCESS, payload)) => Ok(ResponseFrame::Success(payload.to_vec())),
            Some((&STATUS_ERROR, message)) => Ok(ResponseFrame::Error(
                String::from_utf8_lossy(message).into_owned(),
            )),
            Some((&status, _)) => Err(ProtocolError::InvalidStatus(status)),
        }
    }
}
