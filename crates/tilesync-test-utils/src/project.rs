//! [`TestProject`] builder for engine-project test scenarios.
//!
//! Writes a real manifest plus descriptor files to a temp directory so
//! tests exercise the same read/resolve path production does.
//!
//! # Example
//!
//! ```rust,no_run
//! use tilesync_test_utils::project::{TestProject, TilesetSpec};
//!
//! let mut project = TestProject::new();
//! project.add_tileset(TilesetSpec::new("Grass", 16, 16).separation(2, 2), "abc");
//! project.add_object("Door");
//! let manifest = project.manifest_path();
//! ```

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use tilesync_manifest::NormalizedPath;

/// Geometry of a test tileset descriptor.
#[derive(Debug, Clone)]
pub struct TilesetSpec {
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
    pub h_separation: u32,
    pub v_separation: u32,
}

impl TilesetSpec {
    pub fn new(name: impl Into<String>, tile_width: u32, tile_height: u32) -> Self {
        Self {
            name: name.into(),
            tile_width,
            tile_height,
            x_offset: 0,
            y_offset: 0,
            h_separation: 0,
            v_separation: 0,
        }
    }

    pub fn offset(mut self, x: u32, y: u32) -> Self {
        self.x_offset = x;
        self.y_offset = y;
        self
    }

    pub fn separation(mut self, h: u32, v: u32) -> Self {
        self.h_separation = h;
        self.v_separation = v;
        self
    }
}

/// A temporary engine-project directory with a manifest and descriptors.
pub struct TestProject {
    temp_dir: TempDir,
    /// Manifest entries as (key, resourceType, resourcePath)
    resources: Vec<(String, String, String)>,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project with an empty manifest.
    pub fn new() -> Self {
        let project = Self {
            temp_dir: TempDir::new().expect("TestProject: failed to create temp dir"),
            resources: Vec::new(),
        };
        project.write_manifest();
        project
    }

    /// Root directory of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path to the root manifest.
    pub fn manifest_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.temp_dir.path().join("project.json"))
    }

    /// Directory the sprite descriptor for `tileset_name` lives in, for
    /// asserting expected image paths.
    pub fn sprite_dir(&self, tileset_name: &str) -> NormalizedPath {
        NormalizedPath::new(self.temp_dir.path().join("sprites").join(tileset_name))
    }

    /// Add a tileset resource plus the sprite it references, with one frame.
    pub fn add_tileset(&mut self, spec: TilesetSpec, frame_id: &str) {
        let sprite_key = format!("sp-{}", spec.name.to_lowercase());
        self.write_json(
            &format!("sprites/{}/{}.json", spec.name, spec.name),
            &json!({
                "name": format!("spr{}", spec.name),
                "frames": [ { "compositeImageId": frame_id } ]
            }),
        );
        self.resources.push((
            sprite_key.clone(),
            "Sprite".to_string(),
            format!("sprites/{}/{}.json", spec.name, spec.name),
        ));
        self.add_tileset_with_sprite_ref(spec, &sprite_key);
    }

    /// Add a tileset resource referencing an arbitrary sprite key.
    ///
    /// The sprite itself is not written; use this for dangling references.
    pub fn add_tileset_with_sprite_ref(&mut self, spec: TilesetSpec, sprite_ref: &str) {
        let rel = format!("tilesets/{}.json", spec.name);
        self.write_json(
            &rel,
            &json!({
                "name": spec.name,
                "tileWidth": spec.tile_width,
                "tileHeight": spec.tile_height,
                "xOffset": spec.x_offset,
                "yOffset": spec.y_offset,
                "hSeparation": spec.h_separation,
                "vSeparation": spec.v_separation,
                "spriteRef": sprite_ref
            }),
        );
        self.resources.push((
            format!("ts-{}", spec.name.to_lowercase()),
            "TileSet".to_string(),
            rel,
        ));
        self.write_manifest();
    }

    /// Add an object resource.
    pub fn add_object(&mut self, name: &str) {
        let rel = format!("objects/{name}.json");
        self.write_json(&rel, &json!({ "name": name }));
        self.resources
            .push((format!("ob-{}", name.to_lowercase()), "Object".to_string(), rel));
        self.write_manifest();
    }

    /// Add a manifest entry pointing at a path that is never written.
    pub fn add_missing_resource(&mut self, key: &str, resource_type: &str, rel_path: &str) {
        self.resources.push((
            key.to_string(),
            resource_type.to_string(),
            rel_path.to_string(),
        ));
        self.write_manifest();
    }

    /// Overwrite a descriptor file with raw content, for malformed cases.
    pub fn write_raw(&self, rel_path: &str, content: &str) {
        let path = self.temp_dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestProject: failed to create dirs");
        }
        fs::write(path, content).expect("TestProject: failed to write file");
    }

    fn write_json(&self, rel_path: &str, value: &serde_json::Value) {
        self.write_raw(
            rel_path,
            &serde_json::to_string_pretty(value).expect("TestProject: JSON serialization failed"),
        );
    }

    fn write_manifest(&self) {
        let entries: Vec<_> = self
            .resources
            .iter()
            .map(|(key, resource_type, resource_path)| {
                json!({
                    "Key": key,
                    "Value": {
                        "resourceType": resource_type,
                        "resourcePath": resource_path
                    }
                })
            })
            .collect();
        self.write_json("project.json", &json!({ "resources": entries }));
    }
}
