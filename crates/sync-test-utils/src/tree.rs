//! [`TestTree`] builder for sync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary private-source / public-destination tree pair with helper
/// methods for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use sync_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.write_source(".claude/hooks/check.py", "print('ok')\n");
/// assert!(tree.source_root().join(".claude/hooks/check.py").exists());
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create a fresh pair of `source/` and `target/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestTree: failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("source"))
            .expect("TestTree: failed to create source root");
        fs::create_dir_all(temp_dir.path().join("target"))
            .expect("TestTree: failed to create target root");
        Self { temp_dir }
    }

    /// Root of the private source tree.
    pub fn source_root(&self) -> PathBuf {
        self.temp_dir.path().join("source")
    }

    /// Root of the public destination tree.
    pub fn target_root(&self) -> PathBuf {
        self.temp_dir.path().join("target")
    }

    /// Write a text file under the source root, creating parents.
    pub fn write_source(&self, rel: &str, content: &str) -> PathBuf {
        Self::write(&self.source_root(), rel, content.as_bytes())
    }

    /// Write raw bytes under the source root, creating parents.
    pub fn write_source_bytes(&self, rel: &str, content: &[u8]) -> PathBuf {
        Self::write(&self.source_root(), rel, content)
    }

    /// Write a text file under the target root, creating parents.
    pub fn write_target(&self, rel: &str, content: &str) -> PathBuf {
        Self::write(&self.target_root(), rel, content.as_bytes())
    }

    /// Absolute path of a file under the target root.
    pub fn target_path(&self, rel: &str) -> PathBuf {
        self.target_root().join(rel)
    }

    /// Read a text file under the target root.
    ///
    /// Panics when the file is missing — the assertion is the point.
    pub fn read_target(&self, rel: &str) -> String {
        let path = self.target_path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestTree: failed to read {}: {}", path.display(), e))
    }

    /// Snapshot every file under the target root as `(relative path,
    /// bytes)` pairs, sorted — handy for byte-identical assertions.
    pub fn target_snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let root = self.target_root();
        let mut entries = Vec::new();
        collect(&root, &root, &mut entries);
        entries.sort();
        entries
    }

    fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestTree: failed to create parents");
        }
        fs::write(&path, content).expect("TestTree: failed to write file");
        path
    }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<(String, Vec<u8>)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, out);
        } else if path.is_file() {
            let rel = path
                .strip_prefix(root)
                .expect("TestTree: file outside root")
                .to_string_lossy()
                .replace('\\', "/");
            let bytes = fs::read(&path).expect("TestTree: failed to read file");
            out.push((rel, bytes));
        }
    }
}
