//! Command implementations for syncfolder-cli

pub mod report;
pub mod sync;
pub mod targets;

pub use sync::{run_manifest, run_sync};
pub use targets::run_targets;
