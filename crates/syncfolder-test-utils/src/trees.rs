//! [`TestTrees`] builder for reconcile scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a `source/` and a `target/` folder, with
/// helpers to populate them and assert on the outcome.
///
/// Paths ending in `/` are created as directories, anything else as a file
/// (parents included).
///
/// # Example
///
/// ```rust,no_run
/// use syncfolder_test_utils::TestTrees;
///
/// let trees = TestTrees::new()
///     .with_source(&["img/cat.jpg"])
///     .with_target(&["img/cat.jpg", "img/dog.jpg", "img/old/"]);
/// trees.assert_target_exists("img/dog.jpg");
/// ```
pub struct TestTrees {
    temp_dir: TempDir,
}

impl Default for TestTrees {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrees {
    /// Create the fixture with empty `source/` and `target/` folders.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("source")).unwrap();
        fs::create_dir(temp_dir.path().join("target")).unwrap();
        Self { temp_dir }
    }

    /// Fixture whose source folder does not exist at all.
    pub fn without_source() -> Self {
        let trees = Self::new();
        fs::remove_dir(trees.source()).unwrap();
        trees
    }

    /// Directory containing both folders.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> PathBuf {
        self.root().join("source")
    }

    pub fn target(&self) -> PathBuf {
        self.root().join("target")
    }

    pub fn with_source(self, entries: &[&str]) -> Self {
        populate(&self.source(), entries);
        self
    }

    pub fn with_target(self, entries: &[&str]) -> Self {
        populate(&self.target(), entries);
        self
    }

    /// Write `content` to `path` relative to the source folder.
    pub fn write_source(&self, path: &str, content: &str) {
        write_file(&self.source().join(path), content);
    }

    /// Write `content` to `path` relative to the target folder.
    pub fn write_target(&self, path: &str, content: &str) {
        write_file(&self.target().join(path), content);
    }

    /// Write the signature sidecar (`tinypng.json`) into the source folder.
    pub fn write_signatures(&self, json: &str) {
        self.write_source("tinypng.json", json);
    }

    /// Read the signature sidecar back.
    pub fn read_signatures(&self) -> String {
        fs::read_to_string(self.source().join("tinypng.json"))
            .expect("TestTrees::read_signatures: sidecar missing")
    }

    /// Sorted relative paths currently under the target folder; directories
    /// carry a trailing `/`.
    pub fn target_listing(&self) -> Vec<String> {
        listing(&self.target())
    }

    /// Sorted relative paths currently under the source folder.
    pub fn source_listing(&self) -> Vec<String> {
        listing(&self.source())
    }

    /// # Panics
    /// Panics if `path` (relative to the target folder) does not exist.
    pub fn assert_target_exists(&self, path: &str) {
        let full_path = self.target().join(path);
        assert!(
            full_path.symlink_metadata().is_ok(),
            "Expected target entry to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if `path` (relative to the target folder) still exists.
    pub fn assert_target_missing(&self, path: &str) {
        let full_path = self.target().join(path);
        assert!(
            full_path.symlink_metadata().is_err(),
            "Expected target entry NOT to exist: {}",
            full_path.display()
        );
    }
}

fn populate(base: &Path, entries: &[&str]) {
    for entry in entries {
        if let Some(dir) = entry.strip_suffix('/') {
            fs::create_dir_all(base.join(dir)).unwrap();
        } else {
            write_file(&base.join(entry), entry);
        }
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn listing(base: &Path) -> Vec<String> {
    let mut out = Vec::new();
    collect(base, base, &mut out);
    out.sort();
    out
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        // Join components so a backslash inside a name stays visible
        let rel = path
            .strip_prefix(base)
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            out.push(format!("{rel}/"));
            collect(base, &path, out);
        } else {
            out.push(rel);
        }
    }
}
