//! Declarative source→destination mapping

use serde::{Deserialize, Serialize};

/// One mapped item: a file or directory relative to the source root, and
/// where it lands relative to the destination root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub source: String,
    pub dest: String,
}

/// Ordered, read-only list of sync mappings.
#[derive(Debug, Clone, Default)]
pub struct SyncMapping {
    entries: Vec<MapEntry>,
}

impl SyncMapping {
    /// Build a mapping from `(source, dest)` pairs, preserving order.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(source, dest)| MapEntry {
                    source: source.into(),
                    dest: dest.into(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &MapEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
