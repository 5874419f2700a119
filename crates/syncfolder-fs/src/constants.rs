//! Well-known file names.

/// Name of the compression signature sidecar kept directly under the source root.
pub const SIGNATURE_FILE_NAME: &str = "tinypng.json";

/// Manifest file looked up in the working directory when none is given.
pub const DEFAULT_MANIFEST_NAME: &str = "syncfolder.toml";
