// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request decoding.
//!
//! A request is `[COMMAND CODE][ARGUMENT]`. The command code is one byte,
//! conventionally an ASCII digit, and everything after it is the argument,
//! passed through untouched:
//!
//! | Message | Meaning                          |
//! |---------|----------------------------------|
//! | `0foo`  | insert `foo`                     |
//! | `1foo`  | delete `foo`                     |
//! | `2foo`  | check whether `foo` exists       |
//! | `3foo`  | list keys starting with `foo`    |
//! | `4`     | list every key                   |

use std::fmt;

use crate::error::protocol::ProtocolError;

/// Command codes are offsets from this byte.
pub const ASCII_ZERO: u8 = b'0';

/// Numeric command codes as they appear on the wire (minus [`ASCII_ZERO`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandCode {
    /// Insert a key
    Insert = 0,
    /// Delete a key
    Delete = 1,
    /// Check if a key exists
    Exists = 2,
    /// Generate completions for a prefix
    Completions = 3,
    /// List all keys
    Keys = 4,
}

impl CommandCode {
    /// Maps a raw command byte to its code.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.wrapping_sub(ASCII_ZERO) {
            0 => Some(Self::Insert),
            1 => Some(Self::Delete),
            2 => Some(Self::Exists),
            3 => Some(Self::Completions),
            4 => Some(Self::Keys),
            _ => None,
        }
    }

    /// The byte that selects this command on the wire.
    pub fn to_byte(self) -> u8 {
        ASCII_ZERO + self as u8
    }

    /// Lowercase name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Exists => "exists",
            Self::Completions => "completions",
            Self::Keys => "keys",
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded request, borrowing its argument from the message buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Insert `key`; replies whether it was newly added.
    Insert(&'a [u8]),
    /// Delete `key`; replies whether it was present.
    Delete(&'a [u8]),
    /// Replies whether `key` is stored.
    Exists(&'a [u8]),
    /// Replies with every key starting with the prefix.
    Completions(&'a [u8]),
    /// Replies with every key.
    Keys,
}

impl<'a> Command<'a> {
    /// Decodes a raw request message.
    ///
    /// # Errors
    ///
    /// * `ProtocolError::EmptyMessage` - the message has no bytes.
    /// * `ProtocolError::InvalidCommand` - the first byte is not a command code.
    /// * `ProtocolError::UnexpectedArgument` - trailing bytes after the keys command.
    pub fn decode(message: &'a [u8]) -> Result<Self, ProtocolError> {
        let (&first, argument) = message
            .split_first()
            .ok_or(ProtocolError::EmptyMessage)?;

        let code = CommandCode::from_byte(first).ok_or(ProtocolError::InvalidCommand(first))?;

        Ok(match code {
            CommandCode::Insert => Command::Insert(argument),
            CommandCode::Delete => Command::Delete(argument),
            CommandCode::Exists => Command::Exists(argument),
            CommandCode::Completions => Command::Completions(argument),
            CommandCode::Keys => {
                if !argument.is_empty() {
                    return Err(ProtocolError::UnexpectedArgument(code.name()));
                }
                Command::Keys
            }
        })
    }

    /// The code selecting this command.
    pub fn code(&self) -> CommandCode {
        match self {
            Command::Insert(_) => CommandCode::Insert,
            Command::Delete(_) => CommandCode::Delete,
            Command::Exists(_) => CommandCode::Exists,
            Command::Completions(_) => CommandCode::Completions,
            Command::Keys => CommandCode::Keys,
        }
    }

    /// The argument bytes; empty for the keys command.
    pub fn argument(&self) -> &'a [u8] {
        match *self {
            Command::Insert(arg)
            | Command::Delete(arg)
            | Command::Exists(arg)
            | Command::Completions(arg) => arg,
            Command::Keys => &[],
        }
    }

    /// Encodes this command in wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let argument = self.argument();
        let mut bytes = Vec::with_capacity(1 + argument.len());
        bytes.push(self.code().to_byte());
        bytes.extend_from_slice(argument);
        bytes
    }
}
