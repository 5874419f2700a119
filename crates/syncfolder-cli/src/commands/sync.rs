//! Sync and run command implementations
//!
//! `sync` reconciles a single folder given on the command line; `run`
//! reconciles the targets of a manifest, stopping at the first failure.

use std::path::{Path, PathBuf};

use syncfolder_core::{Manifest, SyncConfig, SyncOptions, SyncReport, SyncTask};
use syncfolder_fs::NormalizedPath;
use syncfolder_fs::constants::DEFAULT_MANIFEST_NAME;
use tracing::debug;

use super::report::render_report;
use crate::error::Result;

/// Run the sync command
pub fn run_sync(config: SyncConfig, dry_run: bool, json: bool) -> Result<()> {
    let report = SyncTask::new(config)
        .with_options(SyncOptions { dry_run })
        .run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Run the named manifest targets (all of them when `targets` is empty).
pub fn run_manifest(
    cwd: &Path,
    config: Option<&Path>,
    targets: &[String],
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let manifest = Manifest::load(&manifest_path(cwd, config))?;
    let selected = manifest.resolve_selected(targets)?;
    debug!(count = selected.len(), "resolved manifest targets");

    let mut reports: Vec<SyncReport> = Vec::with_capacity(selected.len());
    for (name, target) in selected {
        let report = SyncTask::new(target)
            .named(&name)
            .with_options(SyncOptions { dry_run })
            .run()?;

        if !json {
            print!("{}", render_report(&report));
            println!();
        }
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

/// Resolve the manifest location against `cwd`.
pub fn manifest_path(cwd: &Path, config: Option<&Path>) -> NormalizedPath {
    let path: PathBuf = match config {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_MANIFEST_NAME),
    };
    NormalizedPath::new(path)
}
