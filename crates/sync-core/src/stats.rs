//! Run-scoped accumulator and report projection

use serde::{Deserialize, Serialize};

/// What a warning means for the run outcome.
///
/// Only `FileError` and `SensitiveContent` escalate the exit code;
/// `Sanitized` and `MissingSource` are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A mapped source root does not exist; sync continued without it
    MissingSource,
    /// A per-file I/O or decode error, recovered locally
    FileError,
    /// A residual secret-shaped match survived the rewrite passes
    SensitiveContent,
    /// Credentials were found and rewritten; nothing leaked
    Sanitized,
}

impl WarningKind {
    /// Whether this kind escalates the final exit code to failure.
    pub fn escalates(self) -> bool {
        matches!(self, Self::FileError | Self::SensitiveContent)
    }
}

/// One accumulated warning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

/// Mutable per-run accumulator: counts, ordered change descriptions,
/// ordered warnings. Created per invocation, discarded after.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStats {
    pub files_copied: u64,
    pub files_skipped: u64,
    pub files_unchanged: u64,
    pub dirs_created: u64,
    pub changes: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl SyncStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change description, in encounter order.
    pub fn record_change(&mut self, description: impl Into<String>) {
        self.changes.push(description.into());
    }

    /// Record a warning of the given kind.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.warnings.push(Warning {
            kind,
            message: message.into(),
        });
    }

    /// Whether any accumulated warning escalates the exit code.
    pub fn has_blocking_warnings(&self) -> bool {
        self.warnings.iter().any(|w| w.kind.escalates())
    }
}

/// Projection of a finished run into an exit code and summary inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub stats: SyncStats,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(stats: SyncStats, dry_run: bool) -> Self {
        Self { stats, dry_run }
    }

    /// 0 on success or sanitization-only; 1 on true processing error or
    /// true-positive secret warning.
    pub fn exit_code(&self) -> i32 {
        if self.stats.has_blocking_warnings() { 1 } else { 0 }
    }
}
