//! Error types for tilesync-publish

/// Result type for publish operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while publishing a tilemap
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential string does not have the expected 4 colon-separated
    /// parts. Fatal to the publish attempt, detected before any network I/O.
    #[error("Invalid credential: expected 'label:user:game:token'")]
    InvalidCredentialFormat,

    /// The service returned 403; the credential is wrong or expired
    #[error("Publish rejected: the service did not accept the credential")]
    AuthenticationRejected,

    /// The service returned an unexpected status
    #[error("Publish failed with status {status}")]
    PublishFailed { status: u16 },

    /// The request never completed (DNS, connect, timeout, ...)
    #[error("Publish transport error: {0}")]
    Transport(#[source] Box<ureq::Error>),
}
