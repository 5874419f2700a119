//! Format-agnostic configuration loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        };

        match extension.as_str() {
            "toml" => {
                let content = io::read_text(path)?;
                toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string()))
            }
            "json" => {
                let content = io::read_text(path)?;
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))
            }
            "yaml" | "yml" => {
                let content = io::read_text(path)?;
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}
