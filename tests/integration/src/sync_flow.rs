//! End-to-end reconciliation scenarios
//!
//! These tests exercise the full flow production takes: descriptor files on
//! disk -> resource graph -> reconcile into a host document, including the
//! persisted ignore list and the object audit.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tilesync_core::host::{OBJECT_IGNORE_PROPERTY, PlacedObject};
use tilesync_core::{IGNORED_TILESETS_PROPERTY, SkipDecision, SyncEngine, TileMapDocument};
use tilesync_manifest::{Finding, NormalizedPath};
use tilesync_test_utils::doc::{MemoryDocument, MemoryLayer};
use tilesync_test_utils::project::{TestProject, TilesetSpec};

fn skip(_: &Finding) -> SkipDecision {
    SkipDecision::Skip
}

#[test]
fn grass_scenario_creates_sized_tileset_with_frame_image() {
    let mut project = TestProject::new();
    project.add_tileset(
        TilesetSpec::new("Grass", 16, 16).offset(0, 0).separation(2, 2),
        "abc",
    );

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert_eq!(report.created, vec!["Grass"]);
    assert_eq!(report.updated, vec!["Grass"]);
    assert!(report.image_changed());
    assert!(report.findings.is_empty());
    assert!(report.is_clean());

    let tileset = doc.tileset("Grass").unwrap();
    assert_eq!(tileset.tile_size(), (16, 16));
    let expected_image = project.sprite_dir("Grass").join("abc.png");
    assert_eq!(tileset.image_path(), Some(expected_image.as_str()));

    // Resolution never escapes the project directory
    let root = NormalizedPath::new(project.root());
    assert!(expected_image.as_str().starts_with(root.as_str()));
}

#[test]
fn second_run_over_unchanged_project_reports_nothing() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");
    project.add_tileset(TilesetSpec::new("Water", 32, 32), "def");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    engine.reconcile(&mut doc, &mut skip).unwrap();

    let second = engine.reconcile(&mut doc, &mut skip).unwrap();
    assert!(second.created.is_empty());
    assert!(second.updated.is_empty());
    assert!(!second.image_changed());
    assert_eq!(doc.tileset_names(), vec!["Grass", "Water"]);
}

#[test]
fn blocked_tileset_is_remembered_across_runs() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Skewed", 16, 16).offset(1, 2), "abc");
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "def");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();

    let mut remember = |_: &Finding| SkipDecision::SkipAndRemember;
    let report = engine.reconcile(&mut doc, &mut remember).unwrap();

    // The healthy sibling still synced
    assert_eq!(report.created, vec!["Grass"]);
    assert!(doc.tileset("Skewed").is_none());
    assert_eq!(
        doc.property(IGNORED_TILESETS_PROPERTY).as_deref(),
        Some("Skewed")
    );

    // Second run: the remembered resource is skipped before validation
    let mut prompted = 0u32;
    let mut counting = |_: &Finding| {
        prompted += 1;
        SkipDecision::Skip
    };
    let second = engine.reconcile(&mut doc, &mut counting).unwrap();
    assert_eq!(prompted, 0);
    assert!(second.findings.is_empty());
    assert!(doc.tileset("Skewed").is_none());
}

#[test]
fn manifest_changes_flow_into_existing_tilesets() {
    let mut project = TestProject::new();
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    engine.reconcile(&mut doc, &mut skip).unwrap();

    // Engine-side edit: new frame id and a larger tile size
    project.write_raw(
        "tilesets/Grass.json",
        r#"{
            "name": "Grass",
            "tileWidth": 32,
            "tileHeight": 32,
            "xOffset": 0,
            "yOffset": 0,
            "hSeparation": 0,
            "vSeparation": 0,
            "spriteRef": "sp-grass"
        }"#,
    );
    project.write_raw(
        "sprites/Grass/Grass.json",
        r#"{ "name": "sprGrass", "frames": [ { "compositeImageId": "xyz" } ] }"#,
    );

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert!(report.created.is_empty());
    assert_eq!(report.updated, vec!["Grass"]);
    let tileset = doc.tileset("Grass").unwrap();
    assert_eq!(tileset.tile_size(), (32, 32));
    assert!(tileset.image_path().unwrap().ends_with("/xyz.png"));
}

#[test]
fn audit_flags_unknown_names_in_nested_groups() {
    let mut project = TestProject::new();
    project.add_object("Wall");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let opt_out = HashMap::from([(OBJECT_IGNORE_PROPERTY.to_string(), "true".to_string())]);
    let doc = MemoryDocument::new().with_layer(MemoryLayer::group(
        "World",
        vec![
            MemoryLayer::tiles("Ground"),
            MemoryLayer::objects(
                "Doors",
                vec![
                    PlacedObject::named("Door"),
                    PlacedObject::named("Wall"),
                    PlacedObject::from_host("Secret", &opt_out),
                ],
            ),
        ],
    ));

    let mismatches = engine.audit_objects(&doc);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].object_name.as_deref(), Some("Door"));
    assert_eq!(mismatches[0].layer_path, "World/Doors");
}

#[test]
fn broken_sibling_does_not_stop_the_run() {
    let mut project = TestProject::new();
    project.add_missing_resource("ts-ghost", "TileSet", "tilesets/ghost.json");
    project.add_tileset(TilesetSpec::new("Grass", 16, 16), "abc");

    let engine = SyncEngine::load(&project.manifest_path()).unwrap();
    let mut doc = MemoryDocument::new();
    let report = engine.reconcile(&mut doc, &mut skip).unwrap();

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.created, vec!["Grass"]);
}

#[test]
fn malformed_root_manifest_aborts_before_any_mutation() {
    let project = TestProject::new();
    project.write_raw("project.json", "not json at all");

    let err = SyncEngine::load(&project.manifest_path()).unwrap_err();
    assert!(matches!(
        err,
        tilesync_core::Error::Manifest(tilesync_manifest::Error::Malformed { .. })
    ));
}
