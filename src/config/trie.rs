//! Trie configuration module.
//!
//! This module defines the settings used to build the word trie: input
//! limits, the prefix-search result cap, and empty-prefix behaviour.

use super::{ConfigResult, Validate};
use crate::data_structures::lau_trie::{DEFAULT_MAX_WORD_LENGTH, DEFAULT_RESULT_CAP};
pub use crate::data_structures::lau_trie::MAX_WORD_LENGTH_LIMIT;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrieSettings {
    /// Longest word accepted, in characters
    pub max_word_length: usize,

    /// Maximum number of matches returned by a prefix search
    pub result_cap: usize,

    /// Whether an empty prefix enumerates every word
    pub empty_prefix_enumerates_all: bool,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            result_cap: DEFAULT_RESULT_CAP,
            empty_prefix_enumerates_all: false,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 || self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: format!("must be between 1 and {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        if self.result_cap == 0 {
            return Err(ConfigError::ValidationError(
                "trie.result_cap must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
