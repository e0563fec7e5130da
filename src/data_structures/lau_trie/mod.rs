// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie: a case-folding word trie with prefix enumeration.
//!
//! Keys are words over the 26 ASCII letters. Case is folded for navigation,
//! so "Car" and "car" reach the same node, while the casing of the first
//! insertion that made a word live is kept as its label.
//!
//! # Features
//!
//! - Exact membership tests and autocomplete-style prefix enumeration in
//!   ascending letter order.
//! - Capped prefix results that report truncation instead of hiding it, plus
//!   an uncapped lazy iterator.
//! - Logical deletion: a deleted word's nodes stay in place until
//!   [`LauTrie::compact`], [`LauTrie::clear`] or teardown.
//! - Optional per-word values through [`LauTrie::insert_with`], returned
//!   with every match.
//! - Explicit-stack enumeration and teardown, so a deep trie never recurses
//!   on the call stack.
//!
//! # Example
//!
//! ```
//! use lau_trie_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! for word in ["cat", "car", "card", "care", "careful"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! assert!(trie.search("car").unwrap());
//! assert!(!trie.search("ca").unwrap());
//!
//! let matches = trie.prefix_search("car").unwrap();
//! assert_eq!(matches.words().collect::<Vec<_>>(), ["car", "card", "care", "careful"]);
//! ```
//!
//! # Invalid input
//!
//! Any character outside `a-z`/`A-Z` fails that call with
//! [`LauTrieError::InvalidCharacter`]. Lookups validate the whole word before
//! walking. An insertion aborts at the offending character, and nodes
//! already created for the valid prefix are left in place.

mod collector;
mod config;
mod error;
mod node;

pub use collector::{Collector, PrefixMatches, WordMatch, Words};
pub use self::config::{
    LauTrieConfig, DEFAULT_MAX_WORD_LENGTH, DEFAULT_RESULT_CAP, MAX_WORD_LENGTH_LIMIT,
};
pub use error::{LauTrieError, LauTrieResult};
pub use node::{index_letter, letter_index, TrieNode, ALPHABET_SIZE};

/// A case-folding word trie.
///
/// `V` is an optional value stored with each live word, such as the URL of a
/// bookmark whose title is the word. The default `()` makes a plain word set.
///
/// The trie owns its whole node graph. It is not synchronized; callers that
/// share it between threads wrap it in their own lock.
#[derive(Debug)]
pub struct LauTrie<V = ()> {
    /// The root node; never terminal
    root: TrieNode<V>,

    /// Number of terminal nodes
    len: usize,

    /// Number of allocated nodes, excluding the root
    node_count: usize,

    /// Configuration options
    config: LauTrieConfig,
}

impl LauTrie {
    /// Creates a new empty `LauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LauTrieConfig::default())
    }

    /// Creates a new empty `LauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LauTrieConfig) -> Self {
        Self::with_values(config)
    }
}

impl<V> LauTrie<V> {
    /// Creates a new empty trie that stores a `V` with each word.
    pub fn with_values(config: LauTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            node_count: 0,
            config,
        }
    }

    /// Returns the trie's configuration.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Inserts a word.
    ///
    /// # Arguments
    ///
    /// * `word` - ASCII letters of any case.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was not live before and now is.
    /// * `Ok(false)` - The word (in any casing) was already live, or `word` is empty.
    ///   The stored label and value are left unchanged.
    /// * `Err(LauTrieError)` - The word is too long or contains an invalid character.
    pub fn insert(&mut self, word: &str) -> LauTrieResult<bool> {
        self.make_live(word, None)
    }

    /// Inserts a word together with its value.
    ///
    /// A word that is already live keeps its first-seen label but takes the
    /// new value. An empty `word` stores nothing.
    ///
    /// # Returns
    ///
    /// Same as [`LauTrie::insert`].
    pub fn insert_with(&mut self, word: &str, value: V) -> LauTrieResult<bool> {
        self.make_live(word, Some(value))
    }

    /// Checks whether `word` is live, ignoring case.
    ///
    /// Exact match only: a proper prefix of a live word is not itself found.
    pub fn search(&self, word: &str) -> LauTrieResult<bool> {
        Ok(self.live_node(word)?.is_some())
    }

    /// Returns the first-seen casing of `word` if it is live.
    pub fn label(&self, word: &str) -> LauTrieResult<Option<&str>> {
        Ok(self.live_node(word)?.and_then(TrieNode::label))
    }

    /// Returns the value stored with `word` if it is live.
    pub fn value(&self, word: &str) -> LauTrieResult<Option<&V>> {
        Ok(self.live_node(word)?.and_then(TrieNode::value))
    }

    /// Lazily iterates over every live word starting with `prefix`, without a cap.
    ///
    /// An empty prefix iterates over the whole trie.
    pub fn iter_prefix(&self, prefix: &str) -> LauTrieResult<Words<'_, V>> {
        Ok(match self.find_node(prefix)? {
            Some(node) => Words::new(node, prefix),
            None => Words::empty(),
        })
    }

    /// Lazily iterates over every live word.
    pub fn iter(&self) -> Words<'_, V> {
        Words::new(&self.root, "")
    }

    /// Checks whether any live word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> LauTrieResult<bool> {
        Ok(self.find_node(prefix)?.is_some_and(has_live_word))
    }

    /// Deletes a word, ignoring case.
    ///
    /// Only the terminal flag, label and value are cleared; the word's nodes
    /// remain until [`LauTrie::compact`] runs.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was live and has been deleted.
    /// * `Ok(false)` - The word was not live.
    /// * `Err(LauTrieError)` - The word is too long or contains an invalid character.
    pub fn delete(&mut self, word: &str) -> LauTrieResult<bool> {
        if word.is_empty() {
            return Ok(false);
        }
        let path = self.fold(word)?;

        let mut node = &mut self.root;
        for index in path {
            match node.child_mut(index) {
                Some(child) => node = child,
                None => return Ok(false),
            }
        }

        if node.unmark_terminal() {
            self.len -= 1;
            tracing::trace!(word, live = self.len, "word deleted");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Number of live words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, excluding the root.
    ///
    /// Includes nodes left behind by deletions and by aborted insertions.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Removes branches that lead to no live word.
    ///
    /// # Returns
    ///
    /// The number of nodes released.
    pub fn compact(&mut self) -> usize {
        let removed = prune(&mut self.root);
        self.node_count -= removed;
        tracing::debug!(removed, remaining = self.node_count, "trie compacted");
        removed
    }

    /// Removes every word and node, leaving an empty usable trie.
    pub fn clear(&mut self) {
        release(&mut self.root);
        self.len = 0;
        self.node_count = 0;
    }

    /// Releases every node, children before parents, and consumes the trie.
    ///
    /// # Returns
    ///
    /// The number of nodes released, which equals [`LauTrie::node_count`]
    /// before the call.
    pub fn teardown(mut self) -> usize {
        let released = release(&mut self.root);
        tracing::debug!(released, "trie torn down");
        self.len = 0;
        self.node_count = 0;
        released
    }

    fn make_live(&mut self, word: &str, value: Option<V>) -> LauTrieResult<bool> {
        self.check_length(word)?;
        if word.is_empty() {
            return Ok(false);
        }

        let node = self.walk_or_create(word)?;
        let inserted = node.mark_terminal(word);
        if let Some(value) = value {
            node.set_value(value);
        }

        if inserted {
            self.len += 1;
            tracing::trace!(word, live = self.len, "word inserted");
        }
        Ok(inserted)
    }

    /// Walks `word`, allocating missing nodes. Aborts at the first invalid
    /// character, leaving the nodes already created.
    fn walk_or_create(&mut self, word: &str) -> LauTrieResult<&mut TrieNode<V>> {
        let mut node = &mut self.root;
        for (position, c) in word.chars().enumerate() {
            let index = match letter_index(c) {
                Some(index) => index,
                None => {
                    tracing::debug!(word, position, character = %c, "insert aborted on invalid character");
                    return Err(invalid_character(c, position, word));
                }
            };

            let (child, created) = node.child_or_insert(index);
            if created {
                self.node_count += 1;
            }
            node = child;
        }
        Ok(node)
    }

    fn check_length(&self, word: &str) -> LauTrieResult<()> {
        let max_length = self.config.max_word_length();
        // Byte length bounds the character count from above.
        if word.len() > max_length {
            let length = word.chars().count();
            if length > max_length {
                return Err(LauTrieError::WordTooLong { length, max_length });
            }
        }
        Ok(())
    }

    /// Folds a whole word into slot indices.
    fn fold(&self, word: &str) -> LauTrieResult<Vec<usize>> {
        self.check_length(word)?;
        word.chars()
            .enumerate()
            .map(|(position, c)| letter_index(c).ok_or_else(|| invalid_character(c, position, word)))
            .collect()
    }

    fn find_node(&self, word: &str) -> LauTrieResult<Option<&TrieNode<V>>> {
        let path = self.fold(word)?;
        Ok(path
            .into_iter()
            .try_fold(&self.root, |node, index| node.child(index)))
    }

    fn live_node(&self, word: &str) -> LauTrieResult<Option<&TrieNode<V>>> {
        if word.is_empty() {
            return Ok(None);
        }
        Ok(self.find_node(word)?.filter(|node| node.is_terminal()))
    }
}

impl<V: Clone> LauTrie<V> {
    /// Finds the live words starting with `prefix`, capped at the configured
    /// result cap.
    ///
    /// Returned words start with `prefix` exactly as given, followed by the
    /// remaining letters in lowercase. An empty prefix yields an empty result
    /// unless the trie is configured with
    /// [`LauTrieConfig::empty_prefix_enumerates_all`].
    pub fn prefix_search(&self, prefix: &str) -> LauTrieResult<PrefixMatches<V>> {
        if prefix.is_empty() {
            if self.config.enumerates_all_on_empty_prefix() {
                return Ok(self.enumerate_all());
            }
            return Ok(PrefixMatches::empty());
        }

        Ok(match self.find_node(prefix)? {
            Some(node) => Collector::new(self.config.result_cap()).collect(node, prefix),
            None => PrefixMatches::empty(),
        })
    }

    /// Enumerates every live word from the root, capped at the configured
    /// result cap.
    pub fn enumerate_all(&self) -> PrefixMatches<V> {
        Collector::new(self.config.result_cap()).collect(&self.root, "")
    }
}

impl<V> Default for LauTrie<V> {
    fn default() -> Self {
        Self::with_values(LauTrieConfig::default())
    }
}

impl<V> Drop for LauTrie<V> {
    fn drop(&mut self) {
        release(&mut self.root);
    }
}

impl<'a, V: Clone> IntoIterator for &'a LauTrie<V> {
    type Item = WordMatch<V>;
    type IntoIter = Words<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn invalid_character(character: char, position: usize, word: &str) -> LauTrieError {
    LauTrieError::InvalidCharacter {
        character,
        position,
        word: word.to_owned(),
    }
}

/// Whether `node` or any descendant is terminal.
fn has_live_word<V>(node: &TrieNode<V>) -> bool {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if node.is_terminal() {
            return true;
        }
        stack.extend(node.children().map(|(_, child)| child));
    }
    false
}

/// Drops every descendant of `root` post-order with an explicit stack.
///
/// Each node's children are detached before it is queued for release, so no
/// drop recurses. Returns the number of nodes released.
fn release<V>(root: &mut TrieNode<V>) -> usize {
    let mut stack: Vec<(Box<TrieNode<V>>, bool)> =
        root.take_children().map(|child| (child, false)).collect();
    let mut released = 0;

    while let Some((mut node, expanded)) = stack.pop() {
        if expanded {
            drop(node);
            released += 1;
            continue;
        }
        let children: Vec<Box<TrieNode<V>>> = node.take_children().collect();
        stack.push((node, true));
        stack.extend(children.into_iter().map(|child| (child, false)));
    }

    released
}

/// Removes child subtrees of `node` that contain no terminal node.
fn prune<V>(node: &mut TrieNode<V>) -> usize {
    let mut removed = 0;
    for index in 0..ALPHABET_SIZE {
        let slot = node.slot_mut(index);
        if let Some(child) = slot.as_deref_mut() {
            removed += prune(child);
            if !child.is_terminal() && !child.has_children() {
                *slot = None;
                removed += 1;
            }
        }
    }
    removed
}
