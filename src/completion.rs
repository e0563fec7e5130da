//! Autocomplete results as printed by the command-line tool.
//!
//! [`CompletionOutput`] borrows a [`PrefixMatches`] and renders it either as
//! pretty JSON or as an indented text listing.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::data_structures::PrefixMatches;
use crate::error::LauResult;

/// One completed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionEntry<'a> {
    /// Walk path: the typed prefix followed by lowercase letters
    pub word: &'a str,

    /// First-seen casing of the word
    pub label: &'a str,

    /// Value stored with the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
}

/// An autocomplete result for one prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionOutput<'a> {
    /// The prefix as typed
    pub prefix: &'a str,

    /// Number of entries returned
    pub count: usize,

    /// Whether more words matched than were returned
    pub truncated: bool,

    /// Entries in enumeration order
    pub entries: Vec<CompletionEntry<'a>>,
}

impl<'a> CompletionOutput<'a> {
    /// Builds the output for `prefix` from its matches.
    pub fn new(prefix: &'a str, matches: &'a PrefixMatches<String>) -> Self {
        let entries = matches
            .matches()
            .iter()
            .map(|m| CompletionEntry {
                word: &m.word,
                label: &m.label,
                value: m.value.as_deref(),
            })
            .collect();

        Self {
            prefix,
            count: matches.count(),
            truncated: matches.is_truncated(),
            entries,
        }
    }

    /// Serializes the output as pretty-printed JSON.
    pub fn to_json(&self) -> LauResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for CompletionOutput<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Words starting with '{}': {}", self.prefix, self.count)?;
        for entry in &self.entries {
            match entry.value {
                Some(value) => writeln!(f, "  - {} ({value})", entry.label)?,
                None => writeln!(f, "  - {}", entry.label)?,
            }
        }
        if self.truncated {
            writeln!(f, "  (more matches not shown)")?;
        }
        Ok(())
    }
}
