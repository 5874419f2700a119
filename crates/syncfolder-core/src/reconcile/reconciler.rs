//! Two-pass reconciliation of a target folder against its source

use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::Path;

use syncfolder_fs::{NormalizedPath, Removal, Tree, TreeEntry, io};
use tracing::{debug, info, warn};

use super::plan::{DeletedFile, DeletedFolder, DeletionPlan};
use crate::Result;
use crate::config::{SyncConfig, SyncOptions};

/// Deletes target entries whose relative path is absent from the source.
///
/// Files are handled first, as they are met in the target tree. Candidate
/// folders are collected and only considered afterwards, deepest first, so
/// that a folder emptied by the file pass (or by a deeper folder) can go.
/// Folders are never removed recursively: one that still has children is
/// reported in [`DeletionPlan::skipped_folders`] and left alone.
#[derive(Debug, Clone)]
pub struct Reconciler {
    config: SyncConfig,
    options: SyncOptions,
}

impl Reconciler {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            options: SyncOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run the reconcile and return what was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or if deleting an
    /// entry that still exists fails. Entries that vanish on their own are
    /// not errors.
    pub fn reconcile(&self) -> Result<DeletionPlan> {
        self.config.validate()?;

        let source_root = self.config.source_root();
        let target_root = self.config.target_root();

        let source = Tree::expand(&self.config.source);
        let target = Tree::expand(&self.config.folder);
        debug!(
            source = %source_root,
            folder = %target_root,
            source_entries = source.len(),
            target_entries = target.len(),
            "expanded trees"
        );

        let source_keys = source.keys();
        let candidates = target
            .iter()
            .filter(|entry| !entry.is_root() && !source_keys.contains(entry.relative.as_path()));

        let mut plan = DeletionPlan::new(source_root.clone(), target_root, self.options.dry_run);
        // Entries a dry run has marked for deletion; stands in for the disk state
        let mut planned: HashSet<&Path> = HashSet::new();
        let mut folders: Vec<&TreeEntry> = Vec::new();

        for entry in candidates {
            if entry.is_dir() {
                folders.push(entry);
                continue;
            }
            if self.delete_file(entry)? {
                planned.insert(entry.relative.as_path());
                plan.files.push(DeletedFile {
                    path: NormalizedPath::new(&entry.path),
                    key: entry.key.clone(),
                    source_path: source_root.join(entry.key.as_str()),
                });
            }
        }

        folders.sort_by_key(|entry| Reverse(entry.depth()));

        for entry in folders {
            if self.config.source.join(&entry.relative).is_dir() {
                debug!(path = %entry.path.display(), "source directory appeared, keeping folder");
                continue;
            }

            let folder = DeletedFolder {
                path: NormalizedPath::new(&entry.path),
                key: entry.key.clone(),
            };
            match self.delete_folder(entry, &target, &planned)? {
                Removal::Removed => {
                    planned.insert(entry.relative.as_path());
                    plan.folders.push(folder);
                }
                Removal::NotEmpty => {
                    warn!(path = %entry.path.display(), "folder has no source equivalent but is not empty, skipping");
                    plan.skipped_folders.push(folder);
                }
                Removal::AlreadyGone => {}
            }
        }

        info!(
            folder = %plan.folder,
            files = plan.file_count(),
            folders = plan.folder_count(),
            dry_run = plan.dry_run,
            "reconciled"
        );
        Ok(plan)
    }

    /// Returns true if the file was (or, in a dry run, would be) deleted.
    fn delete_file(&self, entry: &TreeEntry) -> Result<bool> {
        if self.options.dry_run {
            return Ok(entry.path.symlink_metadata().is_ok());
        }

        match io::remove_file(&entry.path)? {
            Removal::Removed => {
                debug!(path = %entry.path.display(), "deleted file");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn delete_folder(
        &self,
        entry: &TreeEntry,
        target: &Tree,
        planned: &HashSet<&Path>,
    ) -> Result<Removal> {
        if !self.options.dry_run {
            let removal = io::remove_empty_dir(&entry.path)?;
            if removal == Removal::Removed {
                debug!(path = %entry.path.display(), "deleted folder");
            }
            return Ok(removal);
        }

        if entry.path.symlink_metadata().is_err() {
            return Ok(Removal::AlreadyGone);
        }
        let has_survivor = target.iter().any(|other| {
            other.is_descendant_of(entry) && !planned.contains(other.relative.as_path())
        });
        Ok(if has_survivor {
            Removal::NotEmpty
        } else {
            Removal::Removed
        })
    }
}
