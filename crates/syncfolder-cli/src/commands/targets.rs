//! Targets command implementation

use std::path::Path;

use colored::Colorize;
use syncfolder_core::Manifest;

use super::sync::manifest_path;
use crate::error::Result;

/// List the targets of a manifest with their resolved folders.
pub fn run_targets(cwd: &Path, config: Option<&Path>) -> Result<()> {
    let path = manifest_path(cwd, config);
    let manifest = Manifest::load(&path)?;

    if manifest.targets.is_empty() {
        println!("No targets declared in {}.", path.as_str().cyan());
        return Ok(());
    }

    println!("Targets in {}:", path.as_str().cyan());
    for name in manifest.target_names() {
        match manifest.resolve(name) {
            Ok(target) => println!(
                "   {} {}: {} -> {}{}",
                "-".green(),
                name.bold(),
                target.source.display(),
                target.folder.display(),
                if target.tinypng { " (tinypng)".dimmed().to_string() } else { String::new() }
            ),
            Err(e) => println!("   {} {}: {}", "!".red(), name.bold(), e),
        }
    }
    Ok(())
}
