//! Scenario, table-driven and property-based tests for the Lau Trie.

use super::{word_set_strategy, word_strategy};
use crate::data_structures::lau_trie::{LauTrie, LauTrieConfig, LauTrieError};
use proptest::prelude::*;
use std::collections::BTreeSet;
use test_case::test_case;

fn trie_of<'a>(words: impl IntoIterator<Item = &'a str>) -> LauTrie {
    let mut trie = LauTrie::with_config(LauTrieConfig::new().with_result_cap(usize::MAX));
    for word in words {
        trie.insert(word).unwrap();
    }
    trie
}

const SCENARIO: [&str; 8] = ["cat", "car", "card", "care", "careful", "apple", "app", "apply"];

#[test_case("car", &["car", "card", "care", "careful"] ; "car prefix")]
#[test_case("app", &["app", "apple", "apply"] ; "app prefix")]
#[test_case("c", &["car", "card", "care", "careful", "cat"] ; "single letter")]
#[test_case("careful", &["careful"] ; "whole word")]
#[test_case("carefully", &[] ; "longer than any word")]
#[test_case("b", &[] ; "absent letter")]
fn test_scenario_prefixes(prefix: &str, expected: &[&str]) {
    let trie = trie_of(SCENARIO);
    let matches = trie.prefix_search(prefix).unwrap();
    assert_eq!(matches.count(), expected.len());
    assert_eq!(matches.words().collect::<Vec<_>>(), expected);
}

#[test_case("car", true ; "live word")]
#[test_case("CARE", true ; "upper case")]
#[test_case("ca", false ; "proper prefix")]
#[test_case("cards", false ; "extension")]
#[test_case("dog", false ; "absent")]
fn test_scenario_search(word: &str, expected: bool) {
    assert_eq!(trie_of(SCENARIO).search(word).unwrap(), expected);
}

#[test_case("c4t", '4', 1 ; "digit")]
#[test_case("über", 'ü', 0 ; "non ascii letter")]
#[test_case("tab\t", '\t', 3 ; "trailing tab")]
#[test_case("x_y", '_', 1 ; "underscore")]
fn test_invalid_characters(word: &str, character: char, position: usize) {
    let mut trie = LauTrie::new();
    let expected = LauTrieError::InvalidCharacter {
        character,
        position,
        word: word.to_string(),
    };
    assert_eq!(trie.insert(word).unwrap_err(), expected);
    assert_eq!(trie.search(word).unwrap_err(), expected);
    assert_eq!(trie.delete(word).unwrap_err(), expected);
    assert_eq!(trie.prefix_search(word).unwrap_err(), expected);
    assert_eq!(trie.len(), 0);
}

#[test]
fn test_delete_keeps_longer_words() {
    let mut trie = trie_of(SCENARIO);
    trie.delete("car").unwrap();
    assert!(!trie.search("car").unwrap());
    for word in ["card", "care", "careful", "cat"] {
        assert!(trie.search(word).unwrap(), "{word} should survive");
    }
    assert_eq!(
        trie.prefix_search("car").unwrap().words().collect::<Vec<_>>(),
        vec!["card", "care", "careful"]
    );
}

#[test]
fn test_delete_absent_is_noop() {
    let mut trie = trie_of(SCENARIO);
    let nodes = trie.node_count();
    assert!(!trie.delete("ca").unwrap());
    assert!(!trie.delete("dog").unwrap());
    assert!(!trie.delete("carefully").unwrap());
    assert_eq!(trie.len(), SCENARIO.len());
    assert_eq!(trie.node_count(), nodes);
}

proptest! {
    // Property: a word is absent before insertion and present after
    #[test]
    fn prop_search_after_insert(word in word_strategy()) {
        let mut trie = LauTrie::new();
        prop_assert!(!trie.search(&word).unwrap());
        prop_assert!(trie.insert(&word).unwrap());
        prop_assert!(trie.search(&word).unwrap());
        prop_assert!(trie.search(&word.to_lowercase()).unwrap());
        prop_assert!(trie.search(&word.to_uppercase()).unwrap());
    }

    // Property: repeated insertion counts once and keeps the first casing
    #[test]
    fn prop_insert_idempotent(word in word_strategy()) {
        let mut trie = LauTrie::new();
        trie.insert(&word).unwrap();
        let nodes = trie.node_count();

        prop_assert!(!trie.insert(&word).unwrap());
        prop_assert!(!trie.insert(&word.to_uppercase()).unwrap());
        prop_assert_eq!(trie.len(), 1);
        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert_eq!(trie.label(&word.to_lowercase()).unwrap(), Some(word.as_str()));
    }

    // Property: prefix search returns exactly the live words with that prefix, in order
    #[test]
    fn prop_prefix_search_matches_model(
        words in word_set_strategy(),
        prefix in "[a-d]{1,3}",
    ) {
        let trie = trie_of(words.iter().map(String::as_str));
        let expected: Vec<&str> = words
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .map(String::as_str)
            .collect();

        let matches = trie.prefix_search(&prefix).unwrap();
        prop_assert_eq!(matches.words().collect::<Vec<_>>(), expected);
        prop_assert!(!matches.is_truncated());
    }

    // Property: the capped result is a prefix of the lazy enumeration
    #[test]
    fn prop_cap_truncates_lazy_order(words in word_set_strategy(), cap in 1usize..20) {
        let mut trie = LauTrie::with_config(LauTrieConfig::new().with_result_cap(cap));
        for word in &words {
            trie.insert(word).unwrap();
        }

        let capped = trie.enumerate_all();
        let lazy: Vec<String> = trie.iter().map(|m| m.word).collect();

        prop_assert_eq!(capped.count(), cap.min(words.len()));
        prop_assert_eq!(capped.is_truncated(), words.len() > cap);
        let expected: Vec<&str> = lazy.iter().take(cap).map(String::as_str).collect();
        prop_assert_eq!(capped.words().collect::<Vec<_>>(), expected);
    }

    // Property: deletions remove exactly the deleted words and the count tracks them
    #[test]
    fn prop_delete_matches_model(words in word_set_strategy(), deleted in word_set_strategy()) {
        let mut trie = trie_of(words.iter().map(String::as_str));
        let nodes = trie.node_count();

        for word in &deleted {
            prop_assert_eq!(trie.delete(word).unwrap(), words.contains(word));
        }

        let remaining: BTreeSet<String> = words.difference(&deleted).cloned().collect();
        let live: BTreeSet<String> = trie.iter().map(|m| m.word).collect();
        prop_assert_eq!(trie.len(), remaining.len());
        prop_assert_eq!(&live, &remaining);
        prop_assert_eq!(trie.node_count(), nodes);

        // Compaction keeps the same live set
        trie.compact();
        let compacted: BTreeSet<String> = trie.iter().map(|m| m.word).collect();
        prop_assert_eq!(compacted, remaining);
    }

    // Property: teardown releases every node that was created
    #[test]
    fn prop_teardown_releases_all_nodes(words in word_set_strategy()) {
        let trie = trie_of(words.iter().map(String::as_str));
        let expected: BTreeSet<String> = words
            .iter()
            .flat_map(|w| (1..=w.len()).map(move |i| w[..i].to_string()))
            .collect();

        prop_assert_eq!(trie.node_count(), expected.len());
        prop_assert_eq!(trie.teardown(), expected.len());
    }
}
