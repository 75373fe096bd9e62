//! Quack service credential parsing
//!
//! The service hands users one composite secret of the form
//! `label:user:game:token`. The user and game segments address the upload
//! path; the whole string doubles as the Basic authorization value, so the
//! raw form is kept alongside the parts.

use crate::{Error, Result};

/// A parsed publish credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub label: String,
    pub user: String,
    pub game: String,
    pub token: String,
    /// The original composite string, sent as the Basic auth value
    raw: String,
}

impl Credential {
    /// Parse a composite credential string.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCredentialFormat`] when the string has fewer than 4
    /// colon-separated parts. No request is ever built from a credential
    /// that failed to parse.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.splitn(4, ':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(label), Some(user), Some(game), Some(token)) => Ok(Self {
                label: label.to_string(),
                user: user.to_string(),
                game: game.to_string(),
                token: token.to_string(),
                raw: raw.to_string(),
            }),
            _ => Err(Error::InvalidCredentialFormat),
        }
    }

    /// The composite string as handed out by the service.
    pub fn as_raw(&self) -> &str {
        &self.raw
    }
}
