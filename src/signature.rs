//! Canonical signature computation for anagram grouping.
//!
//! Two words are anagrams of each other iff their signatures are equal. The
//! signature is the word lowercased with its characters sorted in ascending
//! code point order, e.g. `Apple` maps to `aelpp`.

/// Compute the canonical signature of `word`.
///
/// Lowercases every character, sorts the result ascending by code point and
/// concatenates. Non-alphabetic characters participate as-is; the empty
/// string maps to the empty string.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
