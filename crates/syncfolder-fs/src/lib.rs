//! Filesystem layer for syncfolder
//!
//! Provides tree expansion, root-relative path keys, and the small set of
//! I/O primitives the reconciler and signature index are built on.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod tree;

pub use config::ConfigStore;
pub use constants::SIGNATURE_FILE_NAME;
pub use error::{Error, Result};
pub use io::Removal;
pub use path::NormalizedPath;
pub use tree::{EntryKind, Tree, TreeEntry};
