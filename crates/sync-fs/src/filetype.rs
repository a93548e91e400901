//! Text/binary file-type dispatch
//!
//! Dispatch is by extension allow-list, not content sniffing: everything
//! outside the table is treated as binary and compared by checksum.

use crate::NormalizedPath;

/// Extensions that are processed as text (rewritten and classified).
///
/// Adding a type is a one-line change here.
const TEXT_EXTENSIONS: &[&str] = &[
    "md", "json", "py", "ps1", "sh", "txt", "yaml", "yml", "toml",
];

/// How a file participates in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Read as UTF-8, rewritten, classified, compared by string equality
    Text,
    /// Never opened as text; compared by content checksum
    Binary,
}

impl FileKind {
    /// Classify a file by its extension.
    pub fn from_path(path: &NormalizedPath) -> Self {
        match path.extension() {
            Some(ext) => Self::from_extension(ext),
            None => Self::Binary,
        }
    }

    /// Classify an extension against the allow-list.
    pub fn from_extension(ext: &str) -> Self {
        let lower = ext.to_lowercase();
        if TEXT_EXTENSIONS.contains(&lower.as_str()) {
            Self::Text
        } else {
            Self::Binary
        }
    }

    pub fn is_text(self) -> bool {
        self == Self::Text
    }
}
