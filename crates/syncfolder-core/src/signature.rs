//! Compression signature sidecar
//!
//! The sidecar is a JSON object keyed by source file path; values belong to
//! the compression step and are never inspected. Removing a key makes the
//! compressor treat the file as new if it is ever put back.

use serde::Serialize;
use serde_json::{Map, Value};
use syncfolder_fs::{NormalizedPath, io};
use tracing::debug;

use crate::{Error, Result};

/// Result of pruning the sidecar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneOutcome {
    /// Sidecar entries removed (or, in a preview, that would be removed).
    ///
    /// Counted per key, not per deleted file: a file tracked under both its
    /// relative key and its source-joined path counts twice.
    pub removed: usize,
    /// Whether the file was written back
    pub rewritten: bool,
}

/// Handle on a signature sidecar file.
#[derive(Debug, Clone)]
pub struct SignatureIndex {
    path: NormalizedPath,
}

impl SignatureIndex {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Read the sidecar; `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// [`Error::SignatureParse`] if the content is not a JSON object.
    pub fn load(&self) -> Result<Option<Map<String, Value>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = io::read_text(&self.path)?;
        let parse_error = |message: String| Error::SignatureParse {
            path: self.path.to_native(),
            message,
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(parse_error("expected a JSON object".into())),
            Err(e) => Err(parse_error(e.to_string())),
        }
    }

    /// Remove `deleted` paths from the sidecar and write it back.
    ///
    /// With an empty list, or when the sidecar does not exist, nothing is
    /// read or written. Otherwise the file is always rewritten in full,
    /// even if none of the paths was present.
    pub fn prune<S: AsRef<str>>(&self, deleted: &[S]) -> Result<PruneOutcome> {
        if deleted.is_empty() {
            return Ok(PruneOutcome::default());
        }
        let Some(mut signatures) = self.load()? else {
            debug!(path = %self.path, "no signature file, nothing to prune");
            return Ok(PruneOutcome::default());
        };

        let removed = deleted
            .iter()
            .map(AsRef::as_ref)
            .filter(|key| signatures.remove(*key).is_some())
            .count();

        self.write(&signatures)?;
        debug!(path = %self.path, removed, "pruned signatures");

        Ok(PruneOutcome {
            removed,
            rewritten: true,
        })
    }

    /// Count the keys [`prune`](Self::prune) would remove, without writing.
    pub fn preview<S: AsRef<str>>(&self, deleted: &[S]) -> Result<PruneOutcome> {
        if deleted.is_empty() {
            return Ok(PruneOutcome::default());
        }
        let Some(signatures) = self.load()? else {
            return Ok(PruneOutcome::default());
        };

        let mut seen = std::collections::HashSet::new();
        let removed = deleted
            .iter()
            .map(AsRef::as_ref)
            .filter(|key| signatures.contains_key(*key) && seen.insert(*key))
            .count();

        Ok(PruneOutcome {
            removed,
            rewritten: false,
        })
    }

    /// Tab-indented, matching what the compression step writes.
    fn write(&self, signatures: &Map<String, Value>) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        signatures.serialize(&mut serializer)?;

        io::write_atomic(&self.path, &buf)?;
        Ok(())
    }
}
