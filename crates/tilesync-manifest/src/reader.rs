//! All-or-nothing JSON descriptor loading
//!
//! Descriptor reads are atomic from the caller's point of view: either the
//! file opens, parses as a JSON object, and deserializes into the requested
//! type, or a single error describes what went wrong. No partial values are
//! ever returned.

use std::fs;

use serde::de::DeserializeOwned;

use crate::path::NormalizedPath;
use crate::{Error, Result};

/// Read and parse one descriptor file.
///
/// # Errors
///
/// - [`Error::Unreadable`] when the file cannot be opened or read
/// - [`Error::Malformed`] when the content is not valid JSON, the root is
///   not an object, or required attributes are missing
pub fn read_json<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    let native = path.to_native();
    let text = fs::read_to_string(&native).map_err(|e| Error::unreadable(&native, e))?;

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| Error::malformed(&native, e.to_string()))?;
    if !value.is_object() {
        return Err(Error::malformed(&native, "root is not a JSON object"));
    }

    serde_json::from_value(value).map_err(|e| Error::malformed(&native, e.to_string()))
}
