//! Exclusion matching
//!
//! Decides whether a path participates in sync at all. Matching is total,
//! deterministic, and does no I/O; it must run before any file is opened.

use sync_fs::NormalizedPath;

/// Path segment marking a folder as retired from publication
const RETIRED_MARKER: &str = "retired";

/// A set of literal path fragments that exclude a path from sync.
///
/// A path is excluded if any fragment is a substring of the normalized path
/// string, equals the final component, or is a suffix of it; or if any path
/// segment equals the retirement marker. Fragment order is irrelevant.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    fragments: Vec<String>,
}

impl ExclusionSet {
    /// Build an exclusion set from literal fragments.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// An exclusion set that excludes nothing but retired folders.
    pub fn empty() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Check whether `path` is excluded from sync.
    pub fn is_excluded(&self, path: &NormalizedPath) -> bool {
        let path_str = path.as_str();
        let name = path.file_name().unwrap_or_default();

        for fragment in &self.fragments {
            if path_str.contains(fragment.as_str())
                || name == fragment
                || name.ends_with(fragment.as_str())
            {
                return true;
            }
        }

        path.segments().any(|segment| segment == RETIRED_MARKER)
    }

    /// Number of configured fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
