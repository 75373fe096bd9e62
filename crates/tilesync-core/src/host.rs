//! Host map-editor document abstraction
//!
//! The editing application owns the tile-map document, its tileset
//! collection, and its layer tree. This module is the seam: everything the
//! reconciliation engine needs from the host, expressed as traits over
//! handles. The engine never clones these objects or caches them across
//! runs; ownership stays with the host and mutation happens only through
//! the setters exposed here.

use std::collections::HashMap;

/// Document property holding the comma-joined ignore list.
pub const IGNORED_TILESETS_PROPERTY: &str = "Ignored Tilesets";

/// Document property holding the publish credential.
pub const SECRET_KEY_PROPERTY: &str = "Quack Secret Key";

/// Per-object property that opts a placed object out of name auditing.
///
/// [`PlacedObject::from_host`] resolves this flag into
/// [`PlacedObject::sync_ignored`] before the auditor sees the object.
pub const OBJECT_IGNORE_PROPERTY: &str = "Sync Ignored";

/// Map orientation of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Orthogonal,
    Isometric,
    Staggered,
    Hexagonal,
}

/// Order in which tiles are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOrder {
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

/// Encoding of tile layer data in the serialized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDataFormat {
    Xml,
    Csv,
    Base64,
    Base64Gzip,
    Base64Zlib,
}

/// Snapshot of the document settings the publish service cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSettings {
    pub orientation: Orientation,
    pub render_order: RenderOrder,
    pub layer_format: LayerDataFormat,
}

/// One placed object on an object layer, as the auditor sees it.
///
/// `name` is `None` when the object has no name or an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedObject {
    pub name: Option<String>,
    /// True when the object carries the per-object opt-out flag
    pub sync_ignored: bool,
}

impl PlacedObject {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() { None } else { Some(name) },
            sync_ignored: false,
        }
    }

    pub fn unnamed() -> Self {
        Self {
            name: None,
            sync_ignored: false,
        }
    }

    pub fn ignored(mut self) -> Self {
        self.sync_ignored = true;
        self
    }

    /// Build from a host object's name and custom properties.
    ///
    /// The opt-out flag is read from [`OBJECT_IGNORE_PROPERTY`]; the host
    /// stores it as the string `"true"`.
    pub fn from_host(name: impl Into<String>, properties: &HashMap<String, String>) -> Self {
        let mut object = Self::named(name);
        object.sync_ignored = properties
            .get(OBJECT_IGNORE_PROPERTY)
            .is_some_and(|value| value == "true");
        object
    }
}

/// One entry in the document's tileset collection.
///
/// Looked up by name, created if absent, mutated in place; never deleted
/// by the engine.
pub trait TargetTileset {
    fn name(&self) -> &str;

    /// Current image path, `None` for a freshly created tileset.
    fn image_path(&self) -> Option<&str>;
    fn set_image_path(&mut self, path: &str);

    fn tile_size(&self) -> (u32, u32);
    fn set_tile_size(&mut self, width: u32, height: u32);

    /// The editor-side margin, compared against engine offsets during
    /// validation. Read-only here: offsets are never auto-applied.
    fn margin(&self) -> u32;
}

/// One layer in the document's layer tree.
///
/// The tree is a strict hierarchy; group layers carry children, object
/// layers carry placed objects, and both accessors return empty for the
/// other layer kinds.
pub trait Layer {
    fn name(&self) -> &str;

    fn is_group(&self) -> bool;
    fn is_object_layer(&self) -> bool;

    /// Child layers in declaration order; empty unless this is a group.
    fn child_layers(&self) -> Vec<&dyn Layer>;

    /// Placed objects in the layer's native order; empty unless this is an
    /// object layer.
    fn objects(&self) -> Vec<PlacedObject>;
}

/// The host tile-map document.
pub trait TileMapDocument {
    /// Read a string custom property.
    fn property(&self, key: &str) -> Option<String>;

    /// Write a string custom property.
    fn set_property(&mut self, key: &str, value: &str);

    /// Names of all tilesets in the document's collection, in collection order.
    fn tileset_names(&self) -> Vec<String>;

    /// Look up a tileset by name.
    fn tileset(&self, name: &str) -> Option<&dyn TargetTileset>;

    /// Look up a tileset by name for mutation.
    fn tileset_mut(&mut self, name: &str) -> Option<&mut dyn TargetTileset>;

    /// Add a new, empty tileset to the collection.
    fn add_tileset(&mut self, name: &str);

    /// Top-level layers in declaration order.
    fn root_layers(&self) -> Vec<&dyn Layer>;

    /// Current document settings, for the publish pre-check.
    fn settings(&self) -> DocumentSettings;

    /// Names of tilesets backed by external files rather than embedded in
    /// the document. The publish service does not support these.
    fn external_tileset_names(&self) -> Vec<String>;
}
