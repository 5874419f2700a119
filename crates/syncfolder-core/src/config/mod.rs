//! Task configuration
//!
//! - [`SyncConfig`] / [`SyncOptions`]: the immutable inputs of one run
//! - [`Manifest`]: a file declaring named targets plus shared defaults

mod manifest;
mod settings;

pub use manifest::{Manifest, TargetOptions};
pub use settings::{SyncConfig, SyncOptions};
