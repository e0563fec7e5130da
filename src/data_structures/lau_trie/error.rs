// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau Trie.
//!
//! Absence of a word or prefix is never an error; lookups report it as
//! `false` or an empty result instead.

/// Errors that can occur in Lau Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LauTrieError {
    /// A character outside `a-z`/`A-Z` appeared in a word or prefix.
    #[error("Invalid character '{character}' at position {position} in '{word}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset of the offending character within the word.
        position: usize,
        /// The word that was rejected.
        word: String,
    },

    /// A word exceeds the configured maximum length.
    #[error("Word of length {length} exceeds maximum word length of {max_length}")]
    WordTooLong {
        /// Length of the rejected word, in characters.
        length: usize,
        /// The maximum allowed length.
        max_length: usize,
    },
}

/// Result type for Lau Trie operations.
pub type LauTrieResult<T> = std::result::Result<T, LauTrieError>;
