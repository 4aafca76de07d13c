//! Anagram lookup over a fixed dictionary.
//!
//! Words are grouped by a canonical signature: the word lowercased with its
//! characters sorted, so every permutation of the same letters collapses to
//! one key. [`AnagramIndex`] is built once from an ordered word sequence and
//! answers lookups without locking; [`SharedIndex`] wraps it in a read/write
//! lock for concurrent readers with serialized rebuilds.

pub mod error;
pub mod index;
pub mod shared;
pub mod signature;
pub mod stats;
pub mod words;

pub use error::AnagramError;
pub use index::AnagramIndex;
pub use shared::SharedIndex;
pub use signature::signature;
pub use stats::IndexStats;
pub use words::load_words;
