//! Recursive tree expansion
//!
//! A [`Tree`] lists a root directory and everything beneath it, in the order
//! the filesystem yields entries (parents always precede their children).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::NormalizedPath;

/// Kind of a tree entry. Symlinks are reported as files and never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One enumerated path of a tree.
///
/// `path` and `relative` are the native paths exactly as the walk produced
/// them and are the only ones used for comparison and I/O. `key` is their
/// forward-slash rendering for reports and signature lookups; names that
/// are not valid UTF-8 are rendered lossily there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Full path as found on disk.
    pub path: PathBuf,
    /// Path relative to the tree root; empty for the root itself.
    pub relative: PathBuf,
    /// Display form of `relative`.
    pub key: NormalizedPath,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_root(&self) -> bool {
        self.relative.as_os_str().is_empty()
    }

    /// Number of components below the root; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.relative.components().count()
    }

    /// True if `self` lies strictly beneath `ancestor`, by whole components.
    pub fn is_descendant_of(&self, ancestor: &TreeEntry) -> bool {
        self.relative != ancestor.relative && self.relative.starts_with(&ancestor.relative)
    }
}

/// An expanded directory tree.
#[derive(Debug, Clone)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Expand `root` recursively, root included.
    ///
    /// A missing root yields an empty tree. Entries that cannot be read
    /// (permissions, removal mid-walk) are skipped with a warning.
    pub fn expand(root: impl AsRef<Path>) -> Self {
        let root_path = root.as_ref();
        let mut entries = Vec::new();

        if root_path.symlink_metadata().is_err() {
            debug!(root = %root_path.display(), "tree root does not exist");
            return Self { entries };
        }

        for entry in WalkDir::new(root_path).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root_path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            let Ok(relative) = entry.path().strip_prefix(root_path) else {
                continue;
            };
            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(TreeEntry {
                path: entry.path().to_path_buf(),
                relative: relative.to_path_buf(),
                key: NormalizedPath::new(relative),
                kind,
            });
        }

        debug!(root = %root_path.display(), count = entries.len(), "expanded tree");

        Self { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set of native relative paths in this tree.
    pub fn keys(&self) -> HashSet<&Path> {
        self.entries.iter().map(|e| e.relative.as_path()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a TreeEntry;
    type IntoIter = std::slice::Iter<'a, TreeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
