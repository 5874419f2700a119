//! Deletion plan produced by a reconcile run

use serde::Serialize;
use syncfolder_fs::NormalizedPath;

/// A target file without source counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedFile {
    /// Path of the deleted file in the target folder
    pub path: NormalizedPath,
    /// Path relative to both roots
    pub key: NormalizedPath,
    /// Where the original would live in the source folder
    pub source_path: NormalizedPath,
}

/// A target directory without source counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedFolder {
    pub path: NormalizedPath,
    pub key: NormalizedPath,
}

/// What a reconcile run deleted, or would delete in a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionPlan {
    pub source: NormalizedPath,
    pub folder: NormalizedPath,
    pub dry_run: bool,
    /// Files, in enumeration order
    pub files: Vec<DeletedFile>,
    /// Folders, deepest first
    pub folders: Vec<DeletedFolder>,
    /// Folder candidates left in place because they still had children
    pub skipped_folders: Vec<DeletedFolder>,
}

impl DeletionPlan {
    pub fn new(source: NormalizedPath, folder: NormalizedPath, dry_run: bool) -> Self {
        Self {
            source,
            folder,
            dry_run,
            files: Vec::new(),
            folders: Vec::new(),
            skipped_folders: Vec::new(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// True when nothing was deleted.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Keys under which deleted files may be tracked in the signature
    /// sidecar: the root-relative key and the source-root-joined path.
    /// A file yields two keys, so prune counts are per key.
    pub fn signature_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.files.len() * 2);
        for file in &self.files {
            keys.push(file.key.as_str().to_string());
            if file.source_path != file.key {
                keys.push(file.source_path.as_str().to_string());
            }
        }
        keys
    }
}
