//! Line-oriented word list loading.
//!
//! The index core consumes an ordered word sequence; this module is the
//! upstream collaborator that produces one from a text file with one word
//! per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AnagramError;

/// Read a word list, one word per line, trailing whitespace stripped.
///
/// No other preprocessing: blank lines become empty words and casing is
/// preserved for output. Any I/O failure surfaces as
/// [`AnagramError::SourceUnavailable`] carrying the offending path.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AnagramError> {
    let path = path.as_ref();
    let unavailable = |source| AnagramError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(unavailable)?;
        words.push(line.trim_end().to_string());
    }
    Ok(words)
}
