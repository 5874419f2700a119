//! Normalized path handling and root-relative keys

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Entries of the source and target trees are compared through their
/// root-relative form, so both sides must agree on separators and on
/// trailing slashes. Native paths are only produced at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and drops a trailing slash
    /// (except for a bare `/`).
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let mut normalized = path_str.replace('\\', "/");
        while normalized.len() > 1 && normalized.ends_with('/') {
            normalized.pop();
        }
        Self { inner: normalized }
    }

    /// The empty relative key, naming a tree root itself.
    pub fn root_key() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True for the empty relative key.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    ///
    /// Joining onto the empty key yields the segment itself, and joining an
    /// empty segment yields `self`.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = Self::new(segment).inner;
        let joined = if segment_normalized.is_empty() {
            self.inner.clone()
        } else if self.inner.is_empty() {
            segment_normalized
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Compute the key of `path` relative to `root`.
    ///
    /// Matching is done on whole path components, so a root of `img` never
    /// claims `img-min/a.png`. Returns `None` when `path` does not live
    /// under `root`; the root itself maps to the empty key.
    pub fn relative_to(path: impl AsRef<Path>, root: impl AsRef<Path>) -> Option<Self> {
        let rel = path.as_ref().strip_prefix(root.as_ref()).ok()?;
        Some(Self::new(rel))
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// Check if this path exists on the filesystem.
    ///
    /// Dangling symlinks count as existing.
    pub fn exists(&self) -> bool {
        self.to_native().symlink_metadata().is_ok()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl serde::Serialize for NormalizedPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_key_of_root_is_empty() {
        let key = NormalizedPath::relative_to("/data/img", "/data/img").unwrap();
        assert!(key.is_empty());
    }

    #[test]
    fn relative_key_requires_whole_component() {
        assert!(NormalizedPath::relative_to("/data/img-min/a.png", "/data/img").is_none());
    }
}
