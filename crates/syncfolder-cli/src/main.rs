//! syncfolder CLI
//!
//! Deletes entries of a compressed output folder that no longer exist in
//! its source folder, and prunes the compression signature file to match.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use syncfolder_core::SyncConfig;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow().bold(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Folder reconciliation CLI", "syncfolder".green().bold());
            println!();
            println!("Run {} for available commands.", "syncfolder --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            source,
            folder,
            tinypng,
            signature_file,
            dry_run,
            json,
        } => {
            let mut config = SyncConfig::new(source, folder).with_tinypng(tinypng);
            if let Some(path) = signature_file {
                config = config.with_signature_file(path);
            }
            commands::run_sync(config, dry_run, json)
        }
        Commands::Run {
            targets,
            config,
            dry_run,
            json,
        } => {
            let cwd = std::env::current_dir()?;
            commands::run_manifest(&cwd, config.as_deref(), &targets, dry_run, json)
        }
        Commands::Targets { config } => {
            let cwd = std::env::current_dir()?;
            commands::run_targets(&cwd, config.as_deref())
        }
    }
}
