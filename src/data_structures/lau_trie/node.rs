// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lau Trie.
//!
//! Each node owns one slot per letter of the folded alphabet. A node is
//! created the first time an insertion walks through its path and is only
//! released together with its subtree.

/// Number of child slots per node, one per case-folded ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// Maps an ASCII letter of either case to its slot index.
///
/// Returns `None` for every other character.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Maps a slot index back to its lowercase letter.
#[inline]
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// A node in the Lau Trie.
///
/// `V` is the value associated with the word ending here, if any.
#[derive(Debug)]
pub struct TrieNode<V = ()> {
    /// Child slots indexed by folded letter
    children: [Option<Box<TrieNode<V>>>; ALPHABET_SIZE],

    /// Whether this node ends a live word
    is_terminal: bool,

    /// Casing of the insertion that made this node terminal
    label: Option<String>,

    /// Value stored with the live word
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_terminal: false,
            label: None,
            value: None,
        }
    }
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node currently ends a live word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The first-seen casing of the word ending here, if the node is terminal.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The value stored with the word ending here.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Stores `value`, returning the one it replaces.
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Marks the node terminal and records `word` as its label.
    ///
    /// Returns `false` without touching the label if the node was already terminal.
    pub fn mark_terminal(&mut self, word: &str) -> bool {
        if self.is_terminal {
            return false;
        }
        self.is_terminal = true;
        self.label = Some(word.to_owned());
        true
    }

    /// Clears the terminal flag, label and value.
    ///
    /// Returns `false` if the node was not terminal.
    pub fn unmark_terminal(&mut self) -> bool {
        if !self.is_terminal {
            return false;
        }
        self.is_terminal = false;
        self.label = None;
        self.value = None;
        true
    }

    /// Returns the child in slot `index`, if any.
    pub fn child(&self, index: usize) -> Option<&TrieNode<V>> {
        self.children[index].as_deref()
    }

    /// Returns the child in slot `index` mutably, if any.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut TrieNode<V>> {
        self.children[index].as_deref_mut()
    }

    /// Returns the child in slot `index`, creating it if absent.
    ///
    /// The boolean is `true` when a new node was allocated.
    pub fn child_or_insert(&mut self, index: usize) -> (&mut TrieNode<V>, bool) {
        let created = self.children[index].is_none();
        let child = self.children[index].get_or_insert_with(|| Box::new(TrieNode::new()));
        (child, created)
    }

    /// Iterates over present children in ascending letter order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (usize, &TrieNode<V>)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|child| (i, child)))
    }

    /// Whether any child slot is occupied.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Detaches and returns every child, leaving this node childless.
    pub fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode<V>>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }

    /// Mutable access to a raw child slot.
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Option<Box<TrieNode<V>>> {
        &mut self.children[index]
    }
}
