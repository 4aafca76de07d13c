//! Index summary statistics for CLI reporting and tests.

use serde::Serialize;

use crate::index::AnagramIndex;

/// Shape summary of a built index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// Total words across all groups.
    pub words: usize,
    /// Number of distinct signatures.
    pub groups: usize,
    /// Size of the largest group.
    pub largest_group: usize,
    /// Signature of the largest group, if any.
    pub largest_signature: Option<String>,
}

impl IndexStats {
    pub(crate) fn of(index: &AnagramIndex) -> Self {
        let mut largest_group = 0;
        let mut largest_signature = None;
        for (sig, group) in index.groups() {
            if group.len() > largest_group {
                largest_group = group.len();
                largest_signature = Some(sig.to_string());
            }
        }
        Self {
            words: index.word_count(),
            groups: index.group_count(),
            largest_group,
            largest_signature,
        }
    }

    /// Print a one-line summary to stderr.
    pub fn report(&self) {
        eprintln!(
            "Indexed {} words into {} groups, largest group {} ({})",
            self.words,
            self.groups,
            self.largest_group,
            self.largest_signature.as_deref().unwrap_or("-")
        );
    }
}
