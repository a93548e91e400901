//! Content policy for setup-sync
//!
//! This crate decides what may leave the private tree and in what form:
//!
//! - **Exclusion**: which paths participate in sync at all
//! - **Rewriting**: destructive path anonymization and credential
//!   substitution applied to text content before it is written
//! - **Classification**: detection of residual secret-shaped content that
//!   the rewrite pass did not normalize
//!
//! Everything here is pure: no I/O, no ambient state. Tables are built once
//! (see [`defaults`]) and injected into the orchestrator, so synthetic
//! tables can drive isolated tests.

pub mod classify;
pub mod defaults;
pub mod error;
pub mod exclude;
pub mod rewrite;

pub use classify::{Classifier, Finding};
pub use error::{Error, Result};
pub use exclude::ExclusionSet;
pub use rewrite::{RewriteOutcome, Rewriter};
