// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lau Trie.

use crate::config::trie::TrieSettings;

/// Default maximum word length, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 255;

/// Upper bound for the maximum word length.
///
/// Compaction recurses once per letter, so the limit also bounds its stack depth.
pub const MAX_WORD_LENGTH_LIMIT: usize = 4096;

/// Default maximum number of matches returned by a prefix search.
pub const DEFAULT_RESULT_CAP: usize = 100;

/// Configuration for the Lau Trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauTrieConfig {
    /// Longest word accepted by any operation
    max_word_length: usize,

    /// Maximum number of matches a prefix search returns
    result_cap: usize,

    /// Whether `prefix_search("")` enumerates every word instead of
    /// returning nothing
    empty_prefix_enumerates_all: bool,
}

impl LauTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_length: 255
    /// - result_cap: 100
    /// - empty_prefix_enumerates_all: false
    pub fn new() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            result_cap: DEFAULT_RESULT_CAP,
            empty_prefix_enumerates_all: false,
        }
    }

    /// Set the longest word accepted by the trie.
    ///
    /// # Panics
    ///
    /// Panics if `max_word_length` is 0 or above [`MAX_WORD_LENGTH_LIMIT`].
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        if max_word_length == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        if max_word_length > MAX_WORD_LENGTH_LIMIT {
            panic!("Maximum word length must not exceed {MAX_WORD_LENGTH_LIMIT}");
        }
        self.max_word_length = max_word_length;
        self
    }

    /// Set the maximum number of matches a prefix search returns.
    pub fn with_result_cap(mut self, result_cap: usize) -> Self {
        self.result_cap = result_cap;
        self
    }

    /// Make an empty prefix enumerate every live word.
    pub fn empty_prefix_enumerates_all(mut self, enabled: bool) -> Self {
        self.empty_prefix_enumerates_all = enabled;
        self
    }

    /// Get the maximum word length.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Get the result cap.
    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// Get whether an empty prefix enumerates every word.
    pub fn enumerates_all_on_empty_prefix(&self) -> bool {
        self.empty_prefix_enumerates_all
    }
}

impl Default for LauTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&TrieSettings> for LauTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        Self::new()
            .with_max_word_length(settings.max_word_length.clamp(1, MAX_WORD_LENGTH_LIMIT))
            .with_result_cap(settings.result_cap)
            .empty_prefix_enumerates_all(settings.empty_prefix_enumerates_all)
    }
}
