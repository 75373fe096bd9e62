//! Error types for tilesync-manifest

use std::path::PathBuf;

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading and resolving engine resources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A descriptor file could not be opened or read
    #[error("Could not read descriptor at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A descriptor file was read but is not valid JSON of the expected shape
    #[error("Malformed descriptor at {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// A resource referenced a manifest key that resolves to no entry
    #[error("Reference '{key}' does not match any resource in the manifest")]
    DanglingReference { key: String },

    /// A sprite descriptor carries no frames, so no image can be derived
    #[error("Sprite '{name}' has no frames")]
    NoFrames { name: String },
}

impl Error {
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}
