//! Folder reconciliation for syncfolder
//!
//! Keeps a derived ("compressed") folder in step with its source folder:
//!
//! - **Reconciler**: deletes every target entry whose relative path has no
//!   counterpart in the source tree, files first, then emptied folders
//! - **SignatureIndex**: prunes the compression signature sidecar so that a
//!   reintroduced source file gets processed again
//! - **Configuration**: immutable per-target settings, optionally loaded from
//!   a manifest declaring several named targets
//!
//! # Example
//!
//! ```no_run
//! use syncfolder_core::{SyncConfig, SyncTask};
//!
//! let config = SyncConfig::new("assets/images", "public/img").with_tinypng(true);
//! let report = SyncTask::new(config).run()?;
//! println!("{} files deleted", report.plan.file_count());
//! # Ok::<(), syncfolder_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod reconcile;
pub mod signature;
pub mod task;

pub use config::{Manifest, SyncConfig, SyncOptions, TargetOptions};
pub use error::{Error, Result};
pub use reconcile::{DeletedFile, DeletedFolder, DeletionPlan, Reconciler};
pub use signature::{PruneOutcome, SignatureIndex};
pub use task::{SignatureReport, SyncReport, SyncTask};
