//! Data structures for Lau Trie.
//!
//! The word trie and its traversal helpers live here. The structures are
//! single-threaded and own their storage outright; sharing across threads is
//! left to the caller.

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauTrie, LauTrieConfig, LauTrieError, LauTrieResult, PrefixMatches};
