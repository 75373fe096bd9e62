//! Request construction and the blocking publish transport

use crate::credential::Credential;
use crate::{Error, Result};

/// Base URL of the public Quack service.
pub const DEFAULT_BASE_URL: &str = "https://quack.games";

/// A fully-built publish request, independent of any transport.
///
/// Construction is pure so tests can assert on the URL and headers without
/// touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub url: String,
    /// Value of the `Authorization` header
    pub authorization: String,
    /// Value of the `Content-Type` header
    pub content_type: String,
    /// The serialized map document, treated as an opaque byte stream
    pub body: Vec<u8>,
}

impl PublishRequest {
    /// Build a PUT request for one tilemap upload.
    pub fn build(
        base_url: &str,
        credential: &Credential,
        tilemap_name: &str,
        body: Vec<u8>,
    ) -> Self {
        let url = format!(
            "{}/api/quack/users/{}/games/{}/tilemaps/{}",
            base_url.trim_end_matches('/'),
            credential.user,
            credential.game,
            tilemap_name
        );
        Self {
            url,
            authorization: format!("Basic {}", credential.as_raw()),
            content_type: "application/xml".to_string(),
            body,
        }
    }
}

/// Blocking HTTP client for the Quack service.
///
/// Issues exactly one request per call, with no retries and no
/// cancellation; once sent, a request runs to completion or failure.
pub struct PublishClient {
    base_url: String,
    agent: ureq::Agent,
}

impl Default for PublishClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PublishClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Parse the credential, build the request, and send it.
    pub fn publish(
        &self,
        credential_string: &str,
        tilemap_name: &str,
        body: Vec<u8>,
    ) -> Result<()> {
        let credential = Credential::parse(credential_string)?;
        let request = PublishRequest::build(&self.base_url, &credential, tilemap_name, body);
        self.send(request)
    }

    /// Send an already-built request.
    ///
    /// # Errors
    ///
    /// - [`Error::AuthenticationRejected`] on status 403
    /// - [`Error::PublishFailed`] on any other non-200 status
    /// - [`Error::Transport`] when the request never completed
    pub fn send(&self, request: PublishRequest) -> Result<()> {
        tracing::debug!(url = %request.url, bytes = request.body.len(), "publishing tilemap");

        let response = self
            .agent
            .put(&request.url)
            .set("Authorization", &request.authorization)
            .set("Content-Type", &request.content_type)
            .send_bytes(&request.body);

        match response {
            Ok(resp) if resp.status() == 200 => Ok(()),
            Ok(resp) => Err(Error::PublishFailed {
                status: resp.status(),
            }),
            Err(ureq::Error::Status(403, _)) => Err(Error::AuthenticationRejected),
            Err(ureq::Error::Status(status, _)) => Err(Error::PublishFailed { status }),
            Err(e) => Err(Error::Transport(Box::new(e))),
        }
    }
}
