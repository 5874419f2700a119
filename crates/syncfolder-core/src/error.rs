//! Error types for syncfolder-core

use std::path::PathBuf;

/// Result type for syncfolder-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling folders
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Signature sidecar exists but is not a JSON object
    #[error("Failed to parse signature file {path}: {message}")]
    SignatureParse { path: PathBuf, message: String },

    /// Task configuration is incomplete or contradictory
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Named target is not declared in the manifest
    #[error("Target not found: {name}")]
    TargetNotFound { name: String },

    /// Manifest file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Filesystem error from syncfolder-fs
    #[error(transparent)]
    Fs(#[from] syncfolder_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
