use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    /// The upstream word list could not be read. Index construction does not
    /// proceed and never silently yields an empty index.
    #[error("word source {path:?} unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
