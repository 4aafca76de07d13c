//! Signature-keyed anagram index.
//!
//! The index maps each canonical signature to the ordered group of words
//! sharing it. It is built by a sequential fold over the input sequence,
//! one explicit get-or-create-group step per word, and is immutable as far
//! as lookups are concerned.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnagramError;
use crate::signature::signature;
use crate::stats::IndexStats;
use crate::words::load_words;

/// Mapping from canonical signature to the group of words sharing it.
///
/// Groups keep their members in first-seen input order and preserve
/// duplicates. Lookups never mutate the index, so a fully-built value can be
/// shared freely between readers.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AnagramIndex {
    groups: HashMap<String, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from an ordered word sequence.
    ///
    /// Every group's member order equals the relative order of first
    /// occurrence in the input, and the total size across groups equals the
    /// input length.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word);
        }
        index
    }

    /// Build an index from a line-oriented word file.
    ///
    /// Fails with [`AnagramError::SourceUnavailable`] when the file cannot
    /// be read; construction does not proceed on a missing source.
    pub fn from_words_file<P: AsRef<Path>>(path: P) -> Result<Self, AnagramError> {
        Ok(Self::from_words(load_words(path)?))
    }

    /// Append one word to the group for its signature, creating the group
    /// if absent.
    pub fn insert(&mut self, word: String) {
        let key = signature(&word);
        self.groups.entry(key).or_default().push(word);
        self.word_count += 1;
    }

    /// All words whose letters are a permutation of `query`, in first-seen
    /// order.
    ///
    /// Returns an empty slice when no group matches; absence is a normal
    /// result, not an error. The query itself need not be in the dictionary.
    pub fn lookup(&self, query: &str) -> &[String] {
        self.groups
            .get(&signature(query))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of words across all groups.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct signatures.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Iterate over `(signature, group)` pairs in arbitrary order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::of(self)
    }
}
