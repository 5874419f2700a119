//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// syncfolder - Delete files from a compressed folder that no longer exist in its source folder
#[derive(Parser, Debug)]
#[command(name = "syncfolder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reconcile one folder against its source
    ///
    /// Every file or directory in FOLDER whose relative path does not exist
    /// in SOURCE is deleted.
    ///
    /// Examples:
    ///   syncfolder sync --source assets/img --folder public/img
    ///   syncfolder sync --source assets/img --folder public/img --tinypng
    ///   syncfolder sync --source assets/img --folder public/img --dry-run
    Sync {
        /// Folder holding the originals
        #[arg(short, long)]
        source: PathBuf,

        /// Folder to prune
        #[arg(short, long)]
        folder: PathBuf,

        /// Also prune the tinypng.json signature file in SOURCE
        #[arg(long)]
        tinypng: bool,

        /// Signature file to prune instead of SOURCE/tinypng.json
        #[arg(long, requires = "tinypng")]
        signature_file: Option<PathBuf>,

        /// Preview deletions without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run targets declared in a manifest
    ///
    /// Runs every target when none is named.
    ///
    /// Examples:
    ///   syncfolder run                  # all targets in syncfolder.toml
    ///   syncfolder run images icons     # selected targets
    ///   syncfolder run -c build/sync.yaml --dry-run
    Run {
        /// Targets to run
        targets: Vec<String>,

        /// Manifest file (TOML, JSON or YAML)
        #[arg(short, long, env = "SYNCFOLDER_CONFIG")]
        config: Option<PathBuf>,

        /// Preview deletions without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List targets declared in a manifest
    Targets {
        /// Manifest file (TOML, JSON or YAML)
        #[arg(short, long, env = "SYNCFOLDER_CONFIG")]
        config: Option<PathBuf>,
    },
}
