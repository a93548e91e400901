//! Filesystem layer for setup-sync
//!
//! Provides cross-platform path normalization, content checksums, atomic
//! write operations, and text/binary file-type dispatch.

pub mod checksum;
pub mod error;
pub mod filetype;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use filetype::FileKind;
pub use path::NormalizedPath;
