//! SyncEngine implementation
//!
//! The SyncEngine walks the declarative source→destination mapping and
//! applies, per file: exclusion → read → rewrite (text only) → classify
//! (warn-only) → change-detect → conditional write. Sync is strictly
//! one-way; destination content is only ever read for equality comparison.

use std::fs;

use sync_fs::{FileKind, NormalizedPath, checksum, io};
use sync_policy::{Classifier, ExclusionSet, Rewriter};

use crate::mapping::SyncMapping;
use crate::stats::{SyncStats, WarningKind};
use crate::{Error, Result, generator};

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, compute all decisions without modifying the filesystem.
    /// Change entries are prefixed with `[DRY] `.
    pub dry_run: bool,
}

/// Engine for one-way sanitizing synchronization
///
/// All configuration — mapping, exclusion set, classifier, rewriter — is
/// injected at construction, so synthetic tables can drive isolated tests.
pub struct SyncEngine {
    /// Root of the private source tree
    source_root: NormalizedPath,
    /// Root of the public destination repository
    target_root: NormalizedPath,
    mapping: SyncMapping,
    exclusions: ExclusionSet,
    classifier: Classifier,
    rewriter: Rewriter,
}

impl SyncEngine {
    /// Create a new SyncEngine over injected configuration tables.
    pub fn new(
        source_root: NormalizedPath,
        target_root: NormalizedPath,
        mapping: SyncMapping,
        exclusions: ExclusionSet,
        classifier: Classifier,
        rewriter: Rewriter,
    ) -> Self {
        Self {
            source_root,
            target_root,
            mapping,
            exclusions,
            classifier,
            rewriter,
        }
    }

    /// Root of the private source tree.
    pub fn source_root(&self) -> &NormalizedPath {
        &self.source_root
    }

    /// Root of the public destination repository.
    pub fn target_root(&self) -> &NormalizedPath {
        &self.target_root
    }

    /// The injected mapping, in sync order.
    pub fn mapping(&self) -> &SyncMapping {
        &self.mapping
    }

    /// Run the full sync over every mapping entry.
    ///
    /// A missing destination root is the one fatal condition, checked
    /// before any work. Everything else — missing source roots, per-file
    /// I/O errors, residual secret findings — aggregates into the stats
    /// and never aborts the run.
    ///
    /// # Errors
    ///
    /// Returns `Error::TargetMissing` if the destination root does not
    /// exist.
    pub fn sync(&self, options: SyncOptions) -> Result<SyncStats> {
        if !self.target_root.is_dir() {
            return Err(Error::TargetMissing {
                path: self.target_root.to_native(),
            });
        }

        let mut stats = SyncStats::new();

        for entry in self.mapping.entries() {
            let src = self.source_root.join(&entry.source);
            let dst = self.target_root.join(&entry.dest);
            tracing::debug!(source = %src, dest = %dst, "syncing mapping entry");
            self.sync_root(&src, &dst, &mut stats, options.dry_run);
        }

        Ok(stats)
    }

    /// Run the post-sync example generators.
    ///
    /// Both follow the same write-if-different / dry-run symmetry as the
    /// main sweep and are no-ops when the live source is absent.
    pub fn generate_examples(&self, stats: &mut SyncStats, dry_run: bool) {
        generator::settings_example(
            &self.source_root,
            &self.target_root,
            &self.rewriter,
            stats,
            dry_run,
        );
        generator::tool_config_example(&self.source_root, &self.target_root, stats, dry_run);
    }

    /// Evaluate exclusion against the path relative to the source root, so
    /// where the private tree lives never affects what is published.
    fn is_excluded(&self, path: &NormalizedPath) -> bool {
        match path.relative_to(&self.source_root) {
            Some(rel) => self.exclusions.is_excluded(&NormalizedPath::new(rel)),
            None => self.exclusions.is_excluded(path),
        }
    }

    /// Sync one mapping entry: a single file, or a directory recursively.
    fn sync_root(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        stats: &mut SyncStats,
        dry_run: bool,
    ) {
        if !src.exists() {
            stats.warn(
                WarningKind::MissingSource,
                format!("Source not found: {}", src),
            );
            return;
        }

        if src.is_file() {
            self.process_file(src, dst, stats, dry_run);
            return;
        }

        let mut files = Vec::new();
        if let Err(e) = self.collect_files(src, &mut files) {
            stats.warn(
                WarningKind::FileError,
                format!("Error walking {}: {}", src, e),
            );
        }

        for file in &files {
            let Some(rel) = file.relative_to(src) else {
                continue;
            };
            let dst_path = dst.join(rel);
            self.process_file(file, &dst_path, stats, dry_run);
        }
    }

    /// Recursively enumerate files under `dir` in stable sorted order,
    /// never descending into excluded directories.
    fn collect_files(&self, dir: &NormalizedPath, out: &mut Vec<NormalizedPath>) -> Result<()> {
        let native = dir.to_native();
        let mut entries = fs::read_dir(&native)
            .map_err(|e| sync_fs::Error::io(&native, e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| sync_fs::Error::io(&native, e))?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = NormalizedPath::new(entry.path());
            // Exclusion runs before anything is opened, including the
            // descent into excluded directories
            if self.is_excluded(&path) {
                tracing::debug!(path = %path, "excluded");
                continue;
            }
            let file_type = entry
                .file_type()
                .map_err(|e| sync_fs::Error::io(entry.path(), e))?;
            if file_type.is_dir() {
                self.collect_files(&path, out)?;
            } else if file_type.is_file() {
                out.push(path);
            }
        }
        Ok(())
    }

    /// Sync a single file, downgrading any error to a warning + skip so
    /// one bad file never aborts the run.
    fn process_file(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        stats: &mut SyncStats,
        dry_run: bool,
    ) {
        if self.is_excluded(src) {
            stats.files_skipped += 1;
            return;
        }

        let result = match FileKind::from_path(src) {
            FileKind::Text => self.sync_text_file(src, dst, stats, dry_run),
            FileKind::Binary => self.sync_binary_file(src, dst, stats, dry_run),
        };

        if let Err(e) = result {
            tracing::warn!(path = %src, error = %e, "failed to process file");
            stats.warn(
                WarningKind::FileError,
                format!("Error processing {}: {}", src, e),
            );
            stats.files_skipped += 1;
        }
    }

    fn sync_text_file(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        stats: &mut SyncStats,
        dry_run: bool,
    ) -> Result<()> {
        let raw = io::read_text_lossy(src)?;

        // Substitution always runs before classification, so a finding
        // below signals a pattern the rewrite tables do not normalize
        let outcome = self.rewriter.apply(&raw);
        if outcome.keys_sanitized > 0 {
            stats.warn(
                WarningKind::Sanitized,
                format!(
                    "Sanitized {} API key(s) in {}",
                    outcome.keys_sanitized,
                    src.file_name().unwrap_or_default()
                ),
            );
        }

        for finding in self.classifier.classify(&outcome.content) {
            stats.warn(
                WarningKind::SensitiveContent,
                format!("Potential sensitive data ({}) in {}", finding.family, src),
            );
        }

        let existed = dst.is_file();
        if existed {
            let existing = io::read_text_lossy(dst)?;
            if existing == outcome.content {
                stats.files_unchanged += 1;
                return Ok(());
            }
        }

        self.write(dst, outcome.content.as_bytes(), stats, dry_run)?;
        stats.files_copied += 1;

        let note = if outcome.keys_sanitized > 0 {
            " (sanitized)"
        } else {
            ""
        };
        self.record_change(stats, dst, existed, note, dry_run);
        Ok(())
    }

    fn sync_binary_file(
        &self,
        src: &NormalizedPath,
        dst: &NormalizedPath,
        stats: &mut SyncStats,
        dry_run: bool,
    ) -> Result<()> {
        let src_checksum = checksum::file_checksum(src)?;
        let dst_checksum = checksum::file_checksum(dst)?;
        if src_checksum == dst_checksum {
            stats.files_unchanged += 1;
            return Ok(());
        }

        let existed = dst.is_file();
        let bytes = io::read_bytes(src)?;
        self.write(dst, &bytes, stats, dry_run)?;
        stats.files_copied += 1;
        self.record_change(stats, dst, existed, "", dry_run);
        Ok(())
    }

    /// Live mode: atomic write, creating parents idempotently. Dry-run:
    /// identical decision path with the write suppressed.
    fn write(
        &self,
        dst: &NormalizedPath,
        content: &[u8],
        stats: &mut SyncStats,
        dry_run: bool,
    ) -> Result<()> {
        if dry_run {
            return Ok(());
        }
        if let Some(parent) = dst.parent()
            && !parent.exists()
        {
            stats.dirs_created += 1;
        }
        io::write_atomic(dst, content)?;
        Ok(())
    }

    fn record_change(
        &self,
        stats: &mut SyncStats,
        dst: &NormalizedPath,
        existed: bool,
        note: &str,
        dry_run: bool,
    ) {
        let rel = dst
            .relative_to(&self.target_root)
            .unwrap_or_else(|| dst.as_str());
        let marker = if dry_run { "[DRY] " } else { "" };
        let status = if existed { "Updated" } else { "Added" };
        stats.record_change(format!("  {}{}: {}{}", marker, status, rel, note));
    }
}
