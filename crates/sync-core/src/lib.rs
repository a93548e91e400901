//! Sync orchestration for setup-sync
//!
//! Coordinates the one-way publication pipeline: walk a declarative
//! source→destination mapping, filter through the exclusion set, rewrite
//! and classify text content, detect changes, and write — accumulating a
//! per-run report.
//!
//! # Architecture
//!
//! `sync-core` sits above the policy and filesystem layers and below the
//! CLI:
//!
//! ```text
//!        sync-cli
//!            |
//!        sync-core
//!        /       \
//!  sync-policy  sync-fs
//! ```
//!
//! All tables (mapping, exclusions, patterns) are injected into
//! [`SyncEngine`]; nothing reads ambient global state.

pub mod defaults;
pub mod engine;
pub mod error;
pub mod generator;
pub mod mapping;
pub mod stats;

pub use engine::{SyncEngine, SyncOptions};
pub use error::{Error, Result};
pub use mapping::{MapEntry, SyncMapping};
pub use stats::{RunReport, SyncStats, Warning, WarningKind};
