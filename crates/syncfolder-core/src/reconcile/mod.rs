//! Directory-tree reconciliation
//!
//! Compares a target tree with its source tree by relative path and removes
//! target entries that have no source counterpart:
//! - **plan**: the record of what was (or would be) deleted
//! - **reconciler**: the two-pass deletion, files first, then folders

mod plan;
mod reconciler;

pub use plan::{DeletedFile, DeletedFolder, DeletionPlan};
pub use reconciler::Reconciler;
