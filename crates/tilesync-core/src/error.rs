//! Error types for tilesync-core

/// Result type for tilesync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reconciliation
///
/// Only structural failures surface here; per-resource failures are
/// collected into the [`SyncReport`](crate::SyncReport) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest error at the project root; nothing can be reconciled
    #[error(transparent)]
    Manifest(#[from] tilesync_manifest::Error),
}
