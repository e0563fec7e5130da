//! Lau Trie Library
//!
//! This library contains a case-folding word trie with prefix enumeration,
//! together with the configuration and error-reporting layers used by the
//! `lau_trie` command-line tool. It can also be used as a dependency by
//! other projects.
//!
//! # Architecture
//!
//! - [`data_structures::lau_trie`]: the trie, its collector and lazy iterator
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: per-layer error enums and the error reporter
//! - [`wordlist`]: loading newline-separated word and entry lists
//! - [`completion`]: autocomplete output for the command-line tool

pub mod completion;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Lau Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a trie configured from the global configuration, or from defaults
/// when none has been initialized.
pub fn trie_from_global_config<V>() -> data_structures::LauTrie<V> {
    let settings = config::get_global_config()
        .map(|global| global.get().trie.clone())
        .unwrap_or_default();
    data_structures::LauTrie::with_values(data_structures::LauTrieConfig::from(&settings))
}
