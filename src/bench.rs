//! Benchmarking support for Lau Trie.
//!
//! Deterministic word generators shared by the criterion benchmarks.

/// Generates `count` distinct lowercase words of exactly `length` letters.
///
/// Words are the base-26 spellings of `0..count`, left-padded with `a`, so
/// they share long prefixes the way a real vocabulary does.
pub fn sample_words(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|n| {
            let mut letters = vec![b'a'; length];
            let mut rest = n;
            for slot in letters.iter_mut().rev() {
                *slot = b'a' + (rest % 26) as u8;
                rest /= 26;
                if rest == 0 {
                    break;
                }
            }
            String::from_utf8(letters).unwrap_or_default()
        })
        .collect()
}
