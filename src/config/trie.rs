//! Trie configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::trie::TrieConfig;
use crate::error::config::ConfigError;

/// Upper bound for `max_key_length`. Every trie operation recurses once per
/// key byte, so this caps the stack depth.
pub const MAX_KEY_LENGTH_CEILING: usize = 4096;

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == 0 || self.max_key_length > MAX_KEY_LENGTH_CEILING {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_length".to_string(),
                message: format!(
                    "must be between 1 and {MAX_KEY_LENGTH_CEILING}, got {}",
                    self.max_key_length
                ),
            });
        }

        Ok(())
    }
}
