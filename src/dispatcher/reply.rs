// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Reply encoding.
//!
//! Replies are rendered as compact JSON: a boolean for insert, delete and
//! exists, an array of strings for completions and keys. Key bytes that are
//! not valid UTF-8 are rendered with U+FFFD replacement characters.

use serde::ser::{Serialize, Serializer};

/// The value produced by one trie operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Outcome of insert, delete or exists.
    Flag(bool),
    /// Keys returned by completions or keys.
    Keys(Vec<Vec<u8>>),
}

impl Reply {
    /// Renders the reply as JSON bytes.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl Serialize for Reply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Reply::Flag(flag) => serializer.serialize_bool(*flag),
            Reply::Keys(keys) => {
                serializer.collect_seq(keys.iter().map(|key| String::from_utf8_lossy(key)))
            }
        }
    }
}
