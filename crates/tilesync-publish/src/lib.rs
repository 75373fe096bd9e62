//! HTTP publish client for the Quack tilemap service
//!
//! Publishes a serialized tile-map document to the remote service with a
//! single blocking PUT. Request construction is pure and separated from
//! the transport so it can be tested without a network:
//!
//! - [`Credential`] — the 4-part `label:user:game:token` secret, validated
//!   before any request exists
//! - [`PublishRequest`] — URL, headers, and body, built from parts
//! - [`PublishClient`] — one attempt per invocation, no retries; the
//!   caller decides whether to re-prompt for credentials and try again

pub mod client;
pub mod credential;
pub mod error;

pub use client::{DEFAULT_BASE_URL, PublishClient, PublishRequest};
pub use credential::Credential;
pub use error::{Error, Result};
