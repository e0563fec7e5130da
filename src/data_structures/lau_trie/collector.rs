// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Subtree enumeration for the Lau Trie.
//!
//! Both traversals produce the same depth-first, pre-order, a→z sequence
//! and walk with an explicit stack, so subtree depth never reaches the call
//! stack:
//!
//! - [`Words`] yields matches lazily with no cap.
//! - [`Collector`] drains a [`Words`] up to a fixed cap and records whether
//!   anything was left behind.

use serde::Serialize;

use super::node::{index_letter, TrieNode};

/// A live word found beneath a subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch<V = ()> {
    /// The path as accumulated during the walk: the caller's prefix followed
    /// by lowercase letters.
    pub word: String,

    /// The casing of the insertion that made the word live.
    pub label: String,

    /// The value stored with the word, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<V>,
}

/// Result of a capped prefix enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixMatches<V = ()> {
    matches: Vec<WordMatch<V>>,
    truncated: bool,
}

impl<V> Default for PrefixMatches<V> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            truncated: false,
        }
    }
}

impl<V> PrefixMatches<V> {
    /// An empty result, used when the prefix is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of matches returned.
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match was returned.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// `true` if more live words matched than the cap allowed.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The returned matches in enumeration order.
    pub fn matches(&self) -> &[WordMatch<V>] {
        &self.matches
    }

    /// Walk paths of the returned matches.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.word.as_str())
    }

    /// First-seen casings of the returned matches.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.label.as_str())
    }

    /// Stored values of the returned matches.
    pub fn values(&self) -> impl Iterator<Item = Option<&V>> {
        self.matches.iter().map(|m| m.value.as_ref())
    }

    /// Consumes the result, returning the matches.
    pub fn into_matches(self) -> Vec<WordMatch<V>> {
        self.matches
    }
}

/// Bounded depth-first collector.
#[derive(Debug, Clone, Copy)]
pub struct Collector {
    cap: usize,
}

impl Collector {
    /// Creates a collector that keeps at most `cap` matches.
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Collects the terminal words beneath `node`, seeding the path with `path`.
    ///
    /// Stops at the cap; the result is truncated iff one more live word exists.
    pub fn collect<V: Clone>(self, node: &TrieNode<V>, path: &str) -> PrefixMatches<V> {
        let mut words = Words::new(node, path);
        let matches: Vec<WordMatch<V>> = words.by_ref().take(self.cap).collect();
        let truncated = words.next().is_some();

        if truncated {
            tracing::debug!(
                prefix = path,
                cap = self.cap,
                "prefix enumeration truncated at result cap"
            );
        }

        PrefixMatches { matches, truncated }
    }
}

/// Lazy depth-first iterator over the live words beneath a node.
///
/// Shares one path buffer across the walk; each stack entry records the path
/// length to truncate back to and the letter leading into its node.
#[derive(Debug)]
pub struct Words<'a, V = ()> {
    stack: Vec<(&'a TrieNode<V>, usize, Option<char>)>,
    path: String,
}

impl<'a, V> Words<'a, V> {
    /// Starts an enumeration at `node` with `path` as the accumulated prefix.
    pub fn new(node: &'a TrieNode<V>, path: &str) -> Self {
        Self {
            stack: vec![(node, path.len(), None)],
            path: path.to_owned(),
        }
    }

    /// An iterator that yields nothing.
    pub fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl<'a, V: Clone> Iterator for Words<'a, V> {
    type Item = WordMatch<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, letter)) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(letter) = letter {
                self.path.push(letter);
            }

            // Reverse push so 'a' is popped first.
            let depth = self.path.len();
            for (index, child) in node.children().rev() {
                self.stack.push((child, depth, Some(index_letter(index))));
            }

            if node.is_terminal() {
                return Some(WordMatch {
                    word: self.path.clone(),
                    label: node.label().unwrap_or(self.path.as_str()).to_owned(),
                    value: node.value().cloned(),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::lau_trie::node::letter_index;

    fn build(words: &[&str]) -> TrieNode {
        let mut root = TrieNode::new();
        for word in words {
            let mut node = &mut root;
            for c in word.chars() {
                node = node.child_or_insert(letter_index(c).unwrap()).0;
            }
            node.mark_terminal(word);
        }
        root
    }

    #[test]
    fn test_collect_pre_order() {
        let root = build(&["card", "car", "care", "cat"]);
        let result = Collector::new(100).collect(&root, "");
        let words: Vec<&str> = result.words().collect();
        assert_eq!(words, vec!["car", "card", "care", "cat"]);
        assert!(!result.is_truncated());
    }

    #[test]
    fn test_collect_reports_truncation() {
        let root = build(&["a", "b", "c"]);

        let result = Collector::new(2).collect(&root, "");
        assert_eq!(result.count(), 2);
        assert!(result.is_truncated());

        let result = Collector::new(3).collect(&root, "");
        assert_eq!(result.count(), 3);
        assert!(!result.is_truncated());
    }

    #[test]
    fn test_collect_keeps_seed_casing() {
        let root = build(&["Apple"]);
        let node = root.child(0).unwrap();
        let result = Collector::new(10).collect(node, "A");
        assert_eq!(result.words().collect::<Vec<_>>(), vec!["Apple"]);

        let node = root.child(0).unwrap();
        let result = Collector::new(10).collect(node, "a");
        assert_eq!(result.words().collect::<Vec<_>>(), vec!["apple"]);
        assert_eq!(result.labels().collect::<Vec<_>>(), vec!["Apple"]);
    }

    #[test]
    fn test_words_matches_collector_order() {
        let root = build(&["zoo", "app", "apple", "apply", "b"]);
        let lazy: Vec<WordMatch> = Words::new(&root, "").collect();
        let eager = Collector::new(usize::MAX).collect(&root, "");
        assert_eq!(lazy, eager.into_matches());
        assert_eq!(Words::<()>::empty().count(), 0);
    }

    #[test]
    fn test_values_travel_with_matches() {
        let mut root = TrieNode::new();
        let node = root.child_or_insert(letter_index('g').unwrap()).0;
        node.mark_terminal("G");
        node.set_value(7u32);

        let result = Collector::new(10).collect(&root, "");
        assert_eq!(result.values().collect::<Vec<_>>(), vec![Some(&7)]);
        assert_eq!(result.matches()[0].value, Some(7));
    }
}
