//! SyncEngine tests, driven through the shared in-memory host fixtures.
//!
//! These live in `tests/` rather than a `#[cfg(test)]` module because the
//! fixtures in `tilesync-test-utils` implement the host traits for the
//! externally built `tilesync-core`; an integration test links that same
//! build, so the trait impls unify.

use pretty_assertions::assert_eq;
use tilesync_core::host::{IGNORED_TILESETS_PROPERTY, PlacedObject, TargetTileset, TileMapDocument};
use tilesync_core::{SkipDecision, SyncEngine};
use tilesync_manifest::{Finding, FindingKind, NormalizedPath};
use tilesync_test_utils::doc::{MemoryDocument, MemoryLayer, MemoryTileset};
use tilesync_test_utils::project::{TestProject, TilesetSpec};

fn skip(_: &Finding) -> SkipDecision {
    SkipDecision::Skip
}

#[test]
fn creates_target_tileset_from_engine_resource() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 16).separation(2, 2), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert_eq!(report.created, vec!["Grass"]);
    assert_eq!(report.updated, vec!["Grass"]);
    assert!(report.is_clean());

    let tileset = doc.tileset("Grass").unwrap();
    assert_eq!(tileset.tile_size(), (16, 16));
    assert!(tileset.image_path().unwrap().ends_with("/abc.png"));
}

#[test]
fn reconcile_is_idempotent() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    engine.reconcile(&mut doc, &mut skip).unwrap();

    let second = engine.reconcile(&mut doc, &mut skip).unwrap();
    assert!(second.created.is_empty());
    assert!(second.updated.is_empty());
    assert!(!second.image_changed());
    assert_eq!(doc.tileset_names(), vec!["Grass"]);
}

#[test]
fn produces_at_most_one_entry_per_resource() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");
    project.add_tileset(TilesetSpec::new("Water", 32, 32), "def");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    engine.reconcile(&mut doc, &mut skip).unwrap();

    assert_eq!(doc.tileset_names(), vec!["Grass", "Water"]);
}

#[test]
fn blocking_finding_prevents_creation() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Skewed", 16, 16).offset(1, 2), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert!(doc.tileset("Skewed").is_none());
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::OffsetMismatch);
    assert!(report.created.is_empty());
}

#[test]
fn nonzero_offset_warns_but_still_syncs_existing_tileset() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Shifted", 16, 16).offset(4, 4), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new().with_tileset(
        MemoryTileset::new("Shifted")
            .with_margin(2)
            .with_image_path("old.png"),
    );

    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::NonZeroOffsetWarning);
    assert!(report.created.is_empty());
    assert_eq!(report.updated, vec!["Shifted"]);

    let tileset = doc.tileset("Shifted").unwrap();
    assert!(tileset.image_path().unwrap().ends_with("/abc.png"));
    // The offset itself is never auto-applied to the margin
    assert_eq!(tileset.margin(), 2);
}

#[test]
fn report_serializes_for_the_end_of_run_summary() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Skewed", 16, 16).offset(1, 2), "abc");
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "def");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["created"], serde_json::json!(["Grass"]));
    assert_eq!(value["updated"], serde_json::json!(["Grass"]));
    assert_eq!(value["errors"], serde_json::json!([]));
    assert_eq!(value["findings"][0]["resource"], "Skewed");
    assert_eq!(value["findings"][0]["kind"], "OffsetMismatch");
}

#[test]
fn skip_and_remember_persists_to_ignore_property() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Skewed", 16, 16).separation(2, 4), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();

    let mut remember = |_: &Finding| SkipDecision::SkipAndRemember;
    engine.reconcile(&mut doc, &mut remember).unwrap();
    assert_eq!(
        doc.property(IGNORED_TILESETS_PROPERTY).as_deref(),
        Some("Skewed")
    );

    // Next run never consults the handler for the remembered resource
    let mut called = false;
    let mut tracking = |_: &Finding| {
        called = true;
        SkipDecision::Skip
    };
    let report = engine.reconcile(&mut doc, &mut tracking).unwrap();
    assert!(!called);
    assert!(report.findings.is_empty());
}

#[test]
fn ignored_tileset_is_skipped_without_resolution() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    doc.set_property(IGNORED_TILESETS_PROPERTY, "Grass");

    let report = engine.reconcile(&mut doc, &mut skip).unwrap();
    assert!(report.created.is_empty());
    assert!(doc.tileset("Grass").is_none());
    // The property survives the rewrite at the end of the run
    assert_eq!(
        doc.property(IGNORED_TILESETS_PROPERTY).as_deref(),
        Some("Grass")
    );
}

#[test]
fn dangling_sprite_ref_is_collected_not_fatal() {
    let mut project = TestProject::new();
    project.add_tileset_with_sprite_ref(TilesetSpec::new("Broken", 16, 16), "sp-missing");
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    // The broken resource is reported; the run continues to the next
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Broken:"));
    assert_eq!(report.created, vec!["Grass"]);
}

#[test]
fn existing_tileset_with_same_image_is_not_reported_updated() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 24), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    engine.reconcile(&mut doc, &mut skip).unwrap();

    // Tile size drifts in the document; image path stays the same
    doc.tileset_mut("Grass").unwrap().set_tile_size(8, 8);
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert!(report.updated.is_empty());
    assert_eq!(doc.tileset("Grass").unwrap().tile_size(), (16, 24));
}

#[test]
fn audit_objects_uses_engine_object_names() {
    let mut project = TestProject::new();
    project.add_object("Wall");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let doc = MemoryDocument::new().with_layer(MemoryLayer::objects(
        "Props",
        vec![PlacedObject::named("Door"), PlacedObject::named("Wall")],
    ));

    let mismatches = engine.audit_objects(&doc);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].object_name.as_deref(), Some("Door"));
}

#[test]
fn unreadable_root_manifest_aborts_load() {
    let err = SyncEngine::load(&NormalizedPath::new("/nonexistent/project.json")).unwrap_err();
    assert!(matches!(
        err,
        tilesync_core::Error::Manifest(tilesync_manifest::Error::Unreadable { .. })
    ));
}
