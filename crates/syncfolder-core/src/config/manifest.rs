//! Manifest of named reconcile targets
//!
//! A manifest declares shared defaults under `[options]` and one table per
//! target under `[targets.<name>]`. Target values override the defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use syncfolder_fs::{ConfigStore, NormalizedPath};

use super::SyncConfig;
use crate::{Error, Result};

/// Options of one target, every field optional so that defaults can be
/// layered underneath.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tinypng: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_file: Option<PathBuf>,
}

impl TargetOptions {
    /// Layer `self` over `defaults`; set fields of `self` win.
    pub fn merged_over(&self, defaults: &TargetOptions) -> TargetOptions {
        TargetOptions {
            source: self.source.clone().or_else(|| defaults.source.clone()),
            folder: self.folder.clone().or_else(|| defaults.folder.clone()),
            tinypng: self.tinypng.or(defaults.tinypng),
            signature_file: self
                .signature_file
                .clone()
                .or_else(|| defaults.signature_file.clone()),
        }
    }

    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.source, &mut self.folder, &mut self.signature_file]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Parsed manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Defaults merged into every target
    #[serde(default)]
    pub options: TargetOptions,

    /// Targets keyed by name; run in name order
    #[serde(default)]
    pub targets: BTreeMap<String, TargetOptions>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use syncfolder_core::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [options]
    /// tinypng = true
    ///
    /// [targets.images]
    /// source = "assets/images"
    /// folder = "public/img"
    /// "#).unwrap();
    ///
    /// let config = manifest.resolve("images").unwrap();
    /// assert!(config.tinypng);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Load a manifest file (TOML, JSON or YAML by extension).
    ///
    /// Relative paths inside the manifest are resolved against the
    /// manifest's own directory.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }

        let mut manifest: Manifest = ConfigStore::new().load(path)?;

        let native = path.to_native();
        if let Some(base) = native.parent().filter(|p| !p.as_os_str().is_empty()) {
            manifest.options.rebase(base);
            for target in manifest.targets.values_mut() {
                target.rebase(base);
            }
        }

        Ok(manifest)
    }

    /// Names of all declared targets, in run order.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Resolve one target into a validated [`SyncConfig`].
    pub fn resolve(&self, name: &str) -> Result<SyncConfig> {
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| Error::TargetNotFound {
                name: name.to_string(),
            })?;
        let merged = target.merged_over(&self.options);

        let source = merged.source.ok_or_else(|| {
            Error::invalid_config(format!("target `{name}` has no `source`"))
        })?;
        let folder = merged.folder.ok_or_else(|| {
            Error::invalid_config(format!("target `{name}` has no `folder`"))
        })?;

        let config = SyncConfig {
            source,
            folder,
            tinypng: merged.tinypng.unwrap_or(false),
            signature_file: merged.signature_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the named targets, or every target when `names` is empty.
    pub fn resolve_selected(&self, names: &[String]) -> Result<Vec<(String, SyncConfig)>> {
        let selected: Vec<&str> = if names.is_empty() {
            self.target_names().collect()
        } else {
            names.iter().map(String::as_str).collect()
        };

        selected
            .into_iter()
            .map(|name| Ok((name.to_string(), self.resolve(name)?)))
            .collect()
    }
}
