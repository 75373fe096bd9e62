//! Publish path scenarios: pre-check, naming, and request construction
//!
//! The actual HTTP exchange is a single PUT handled by `PublishClient`;
//! everything up to it is pure and covered here.

use pretty_assertions::assert_eq;
use tilesync_core::host::{DocumentSettings, LayerDataFormat, Orientation, RenderOrder};
use tilesync_core::{SECRET_KEY_PROPERTY, TileMapDocument, check_publish_ready};
use tilesync_manifest::NormalizedPath;
use tilesync_publish::{Credential, DEFAULT_BASE_URL, Error, PublishRequest};
use tilesync_test_utils::doc::MemoryDocument;

#[test]
fn ready_document_builds_a_named_request() {
    let doc = MemoryDocument::new().with_property(SECRET_KEY_PROPERTY, "k:alice:game1:tok");
    assert!(check_publish_ready(&doc).is_empty());

    let secret = doc.property(SECRET_KEY_PROPERTY).unwrap();
    let credential = Credential::parse(&secret).unwrap();

    // Tilemap name comes from the document's file name
    let map_file = NormalizedPath::new("maps/overworld.tmx");
    let tilemap_name = map_file.file_stem().unwrap();

    let request = PublishRequest::build(
        DEFAULT_BASE_URL,
        &credential,
        tilemap_name,
        b"<map/>".to_vec(),
    );

    assert_eq!(
        request.url,
        "https://quack.games/api/quack/users/alice/games/game1/tilemaps/overworld"
    );
    assert_eq!(request.authorization, "Basic k:alice:game1:tok");
    assert_eq!(request.content_type, "application/xml");
}

#[test]
fn misconfigured_document_reports_every_violation_at_once() {
    let doc = MemoryDocument::new()
        .with_settings(DocumentSettings {
            orientation: Orientation::Hexagonal,
            render_order: RenderOrder::RightUp,
            layer_format: LayerDataFormat::Xml,
        })
        .with_external_tileset("Grass");

    let violations = check_publish_ready(&doc);
    assert_eq!(violations.len(), 4);
    assert!(violations.iter().any(|v| v.contains("orthogonal")));
    assert!(violations.iter().any(|v| v.contains("Base64Zlib")));
    assert!(violations.iter().any(|v| v.contains("Right Down")));
    assert!(violations.iter().any(|v| v.contains("Grass")));
}

#[test]
fn malformed_stored_credential_fails_before_any_request() {
    let doc = MemoryDocument::new().with_property(SECRET_KEY_PROPERTY, "badtoken");

    let secret = doc.property(SECRET_KEY_PROPERTY).unwrap();
    let err = Credential::parse(&secret).unwrap_err();
    assert!(matches!(err, Error::InvalidCredentialFormat));
}
