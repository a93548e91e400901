//! Error types for sync-policy

/// Result type for sync-policy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sync-policy operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule table was constructed with a pattern that does not compile
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
