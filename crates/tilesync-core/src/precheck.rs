//! Publish readiness checks for the host document
//!
//! The remote service only accepts orthogonal maps rendered right-down
//! with base64+zlib layer data, and cannot follow references to external
//! tileset files. All violations are collected into one list so the caller
//! can present a single aggregate message instead of failing piecemeal.

use crate::host::{LayerDataFormat, Orientation, RenderOrder, TileMapDocument};

/// Check whether the document can be published as-is.
///
/// Returns every violation found; an empty list means the document is
/// ready. The document is never modified here.
pub fn check_publish_ready(doc: &dyn TileMapDocument) -> Vec<String> {
    let mut violations = Vec::new();
    let settings = doc.settings();

    if settings.orientation != Orientation::Orthogonal {
        violations.push("Map orientation is not orthogonal".to_string());
    }
    if settings.layer_format != LayerDataFormat::Base64Zlib {
        violations.push("Map layer data format is not Base64Zlib".to_string());
    }
    if settings.render_order != RenderOrder::RightDown {
        violations.push("Map render order is not Right Down".to_string());
    }

    let externals = doc.external_tileset_names();
    if !externals.is_empty() {
        violations.push(format!(
            "The following tilesets use external files and must be embedded: {}",
            externals.join(", ")
        ));
    }

    violations
}
