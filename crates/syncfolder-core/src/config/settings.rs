//! Immutable settings for a single reconcile run

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use syncfolder_fs::{NormalizedPath, SIGNATURE_FILE_NAME};

use crate::{Error, Result};

/// What to reconcile: a source folder and the derived folder kept in step
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Folder holding the originals. Never modified, except for the
    /// signature sidecar.
    pub source: PathBuf,

    /// Folder whose entries without a source counterpart get deleted.
    pub folder: PathBuf,

    /// Prune the compression signature sidecar for deleted files.
    #[serde(default)]
    pub tinypng: bool,

    /// Sidecar location; defaults to `tinypng.json` under `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_file: Option<PathBuf>,
}

impl SyncConfig {
    pub fn new(source: impl Into<PathBuf>, folder: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            folder: folder.into(),
            tinypng: false,
            signature_file: None,
        }
    }

    pub fn with_tinypng(mut self, tinypng: bool) -> Self {
        self.tinypng = tinypng;
        self
    }

    pub fn with_signature_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.signature_file = Some(path.into());
        self
    }

    pub fn source_root(&self) -> NormalizedPath {
        NormalizedPath::new(&self.source)
    }

    pub fn target_root(&self) -> NormalizedPath {
        NormalizedPath::new(&self.folder)
    }

    /// Location of the signature sidecar.
    pub fn signature_path(&self) -> NormalizedPath {
        match &self.signature_file {
            Some(path) => NormalizedPath::new(path),
            None => self.source_root().join(SIGNATURE_FILE_NAME),
        }
    }

    /// Check that both roots are set and that the source does not live
    /// inside the folder being pruned.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::invalid_config("`source` must be set"));
        }
        if self.folder.as_os_str().is_empty() {
            return Err(Error::invalid_config("`folder` must be set"));
        }
        if nested_under(&self.source, &self.folder) {
            return Err(Error::invalid_config(format!(
                "source {} lies inside folder {}; reconciling would delete the originals",
                self.source.display(),
                self.folder.display()
            )));
        }
        Ok(())
    }
}

/// True if `inner` is strictly beneath `outer`, compared lexically and,
/// when both exist, after canonicalization.
fn nested_under(inner: &Path, outer: &Path) -> bool {
    let strictly_under = |a: &Path, b: &Path| {
        NormalizedPath::relative_to(a, b).is_some_and(|key| !key.is_empty())
    };

    if strictly_under(inner, outer) {
        return true;
    }
    match (inner.canonicalize(), outer.canonicalize()) {
        (Ok(a), Ok(b)) => strictly_under(&a, &b),
        _ => false,
    }
}

/// How to run a reconcile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Report what would be deleted without touching the filesystem.
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_path_defaults_under_source() {
        let config = SyncConfig::new("assets/images", "public/img");
        assert_eq!(config.signature_path().as_str(), "assets/images/tinypng.json");
    }

    #[test]
    fn signature_path_override_wins() {
        let config =
            SyncConfig::new("assets/images", "public/img").with_signature_file("cache/sigs.json");
        assert_eq!(config.signature_path().as_str(), "cache/sigs.json");
    }

    #[test]
    fn validate_rejects_empty_roots() {
        assert!(SyncConfig::new("", "public").validate().is_err());
        assert!(SyncConfig::new("assets", "").validate().is_err());
    }

    #[test]
    fn validate_rejects_source_inside_folder() {
        let err = SyncConfig::new("dist/src", "dist").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn validate_accepts_sibling_roots_sharing_a_prefix() {
        assert!(SyncConfig::new("img", "img-min").validate().is_ok());
        assert!(SyncConfig::new("img-min", "img").validate().is_ok());
    }

    #[test]
    fn validate_accepts_folder_inside_source() {
        assert!(SyncConfig::new("img", "img/min").validate().is_ok());
    }
}
