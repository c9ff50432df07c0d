/// Error types for loading the catalog and configuration
///
/// The filter engine itself never fails; these errors only come from
/// the edges of the application (files on disk and their contents).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// A catalog or config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog or config file is not valid JSON for its schema
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The built-in catalog shipped with the binary is broken
    #[error("built-in {name} is invalid: {source}")]
    Builtin {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
