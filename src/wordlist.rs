//! Word-list loading.
//!
//! Reads newline-separated words into a trie. Blank lines and `#` comments
//! are ignored; lines the trie rejects are counted and logged, not fatal.
//!
//! Entry lists pair each word with a value, separated by a tab:
//!
//! ```text
//! GitHub	https://github.com
//! GitLab	https://gitlab.com
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_structures::{LauTrie, LauTrieResult};
use crate::error::LauResult;

/// Outcome of loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordListStats {
    /// Words that became live
    pub inserted: usize,
    /// Words that were already live, in any casing
    pub duplicates: usize,
    /// Lines rejected by the trie
    pub rejected: usize,
}

/// Inserts every word read from `reader` into `trie`.
pub fn load_words<V, R: BufRead>(trie: &mut LauTrie<V>, reader: R) -> LauResult<WordListStats> {
    load_lines(reader, |word| trie.insert(word))
}

/// Inserts every `word<TAB>value` entry read from `reader` into `trie`.
///
/// A line without a tab inserts the bare word. A repeated word keeps its
/// first label and takes the later value.
pub fn load_entries<R: BufRead>(
    trie: &mut LauTrie<String>,
    reader: R,
) -> LauResult<WordListStats> {
    load_lines(reader, |line| match line.split_once('\t') {
        Some((word, value)) => trie.insert_with(word.trim(), value.trim().to_owned()),
        None => trie.insert(line),
    })
}

/// Opens `path` and loads its words into `trie`.
pub fn load_word_file<V, P: AsRef<Path>>(
    trie: &mut LauTrie<V>,
    path: P,
) -> LauResult<WordListStats> {
    let file = File::open(path.as_ref())?;
    load_words(trie, BufReader::new(file))
}

/// Opens `path` and loads its entries into `trie`.
pub fn load_entry_file<P: AsRef<Path>>(
    trie: &mut LauTrie<String>,
    path: P,
) -> LauResult<WordListStats> {
    let file = File::open(path.as_ref())?;
    load_entries(trie, BufReader::new(file))
}

fn load_lines<R, F>(reader: R, mut insert: F) -> LauResult<WordListStats>
where
    R: BufRead,
    F: FnMut(&str) -> LauTrieResult<bool>,
{
    let mut stats = WordListStats::default();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match insert(line) {
            Ok(true) => stats.inserted += 1,
            Ok(false) => stats.duplicates += 1,
            Err(e) => {
                tracing::warn!(line = line_number + 1, error = %e, "skipping word");
                stats.rejected += 1;
            }
        }
    }

    tracing::debug!(
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        rejected = stats.rejected,
        "word list loaded"
    );
    Ok(stats)
}
