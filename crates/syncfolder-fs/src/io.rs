//! Atomic writes and race-tolerant deletion

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Outcome of a deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The entry existed and was removed.
    Removed,
    /// The entry was already gone; nothing to do.
    AlreadyGone,
    /// The directory still has children and was left in place.
    NotEmpty,
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    fs::rename(&temp_path, &native_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(&native_path, e)
    })?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Delete a file (or symlink).
///
/// Takes the native path as enumerated, so names that are not valid UTF-8
/// are removed as they are. A file that vanished before or during the call
/// counts as already removed. Any other failure is returned with the
/// offending path.
pub fn remove_file(path: &Path) -> Result<Removal> {
    if path.symlink_metadata().is_err() {
        debug!(path = %path.display(), "file already gone");
        return Ok(Removal::AlreadyGone);
    }

    match fs::remove_file(path) {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Removal::AlreadyGone),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Delete a directory only if it has no children. Never recursive.
pub fn remove_empty_dir(path: &Path) -> Result<Removal> {
    if path.symlink_metadata().is_err() {
        debug!(path = %path.display(), "directory already gone");
        return Ok(Removal::AlreadyGone);
    }

    if !is_empty_dir(path)? {
        return Ok(Removal::NotEmpty);
    }

    match fs::remove_dir(path) {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Removal::AlreadyGone),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// True if the directory at `path` has no entries.
pub fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    Ok(entries.next().is_none())
}
