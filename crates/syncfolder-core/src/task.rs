//! One reconcile target run end to end

use serde::Serialize;
use syncfolder_fs::NormalizedPath;
use tracing::{debug, info};

use crate::Result;
use crate::config::{SyncConfig, SyncOptions};
use crate::reconcile::{DeletionPlan, Reconciler};
use crate::signature::{PruneOutcome, SignatureIndex};

/// Signature sidecar part of a [`SyncReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureReport {
    pub path: NormalizedPath,
    #[serde(flatten)]
    pub outcome: PruneOutcome,
}

/// Report from running one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Manifest target name, if the run came from a manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub plan: DeletionPlan,
    /// Present when signature pruning is enabled and files were deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<SignatureReport>,
}

/// Reconciles one target and, when enabled, prunes its signature sidecar.
#[derive(Debug, Clone)]
pub struct SyncTask {
    name: Option<String>,
    config: SyncConfig,
    options: SyncOptions,
}

impl SyncTask {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            name: None,
            config,
            options: SyncOptions::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the reconcile, then the signature pruning.
    ///
    /// The sidecar is only touched when `tinypng` is set and at least one
    /// file was deleted.
    pub fn run(&self) -> Result<SyncReport> {
        info!(
            target_name = self.name.as_deref().unwrap_or("-"),
            source = %self.config.source.display(),
            folder = %self.config.folder.display(),
            "syncing folder"
        );

        let plan = Reconciler::new(self.config.clone())
            .with_options(self.options)
            .reconcile()?;

        let signatures = if self.config.tinypng && !plan.files.is_empty() {
            let index = SignatureIndex::new(self.config.signature_path());
            let keys = plan.signature_keys();
            let outcome = if self.options.dry_run {
                index.preview(&keys)?
            } else {
                index.prune(&keys)?
            };
            Some(SignatureReport {
                path: index.path().clone(),
                outcome,
            })
        } else {
            debug!("signature pruning not required");
            None
        };

        Ok(SyncReport {
            target: self.name.clone(),
            plan,
            signatures,
        })
    }
}
