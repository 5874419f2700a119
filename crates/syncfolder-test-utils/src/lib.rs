//! Shared test utilities for the syncfolder workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`trees`]: [`TestTrees`], a paired source/target folder fixture

pub mod trees;

pub use trees::TestTrees;
