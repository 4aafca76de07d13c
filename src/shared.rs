//! Concurrency-safe wrapper around [`AnagramIndex`].
//!
//! Lookups take the read side of a read/write lock and never block each
//! other; rebuilds and appends take the write side and are serialized
//! against everything else. Readers observe either the fully-old or the
//! fully-new index, never a partially-built one.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::index::AnagramIndex;
use crate::stats::IndexStats;

/// `Arc`-shareable index handle for many concurrent readers.
pub struct SharedIndex {
    inner: RwLock<AnagramIndex>,
}

impl SharedIndex {
    pub fn new(index: AnagramIndex) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    /// Build a shared index directly from an ordered word sequence.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::new(AnagramIndex::from_words(words))
    }

    /// Look up anagrams of `query`, cloning the group out of the lock.
    pub fn lookup(&self, query: &str) -> Vec<String> {
        self.read().lookup(query).to_vec()
    }

    /// Replace the index with one built from `words`.
    ///
    /// Construction runs under the write lock, so at most one rebuild
    /// proceeds at a time and in-flight lookups see either the fully-old or
    /// the fully-new index.
    pub fn rebuild<I>(&self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut guard = self.write();
        *guard = AnagramIndex::from_words(words);
    }

    /// Append one word, atomically with respect to concurrent lookups of
    /// the same group.
    pub fn insert(&self, word: String) {
        self.write().insert(word);
    }

    pub fn word_count(&self) -> usize {
        self.read().word_count()
    }

    pub fn stats(&self) -> IndexStats {
        self.read().stats()
    }

    // A panicked writer cannot leave the index half-mutated (rebuild swaps
    // in a fully-built value, insert is a single append), so a poisoned
    // lock is recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, AnagramIndex> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AnagramIndex> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::new(AnagramIndex::new())
    }
}
