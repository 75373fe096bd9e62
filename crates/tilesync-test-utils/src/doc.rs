//! In-memory implementations of the host document traits.
//!
//! The real host is a map editor; these stand-ins implement the
//! `tilesync-core` host traits over plain collections so engine behavior
//! can be asserted without one.

use std::collections::HashMap;

use tilesync_core::host::{
    DocumentSettings, Layer, LayerDataFormat, Orientation, PlacedObject, RenderOrder,
    TargetTileset, TileMapDocument,
};

/// An in-memory tileset entry.
#[derive(Debug, Clone)]
pub struct MemoryTileset {
    name: String,
    image_path: Option<String>,
    tile_size: (u32, u32),
    margin: u32,
}

impl MemoryTileset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_path: None,
            tile_size: (0, 0),
            margin: 0,
        }
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

impl TargetTileset for MemoryTileset {
    fn name(&self) -> &str {
        &self.name
    }

    fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    fn set_image_path(&mut self, path: &str) {
        self.image_path = Some(path.to_string());
    }

    fn tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    fn set_tile_size(&mut self, width: u32, height: u32) {
        self.tile_size = (width, height);
    }

    fn margin(&self) -> u32 {
        self.margin
    }
}

/// An in-memory layer tree node.
#[derive(Debug, Clone)]
pub enum MemoryLayer {
    Group {
        name: String,
        children: Vec<MemoryLayer>,
    },
    Objects {
        name: String,
        objects: Vec<PlacedObject>,
    },
    Tiles {
        name: String,
    },
}

impl MemoryLayer {
    pub fn group(name: impl Into<String>, children: Vec<MemoryLayer>) -> Self {
        Self::Group {
            name: name.into(),
            children,
        }
    }

    pub fn objects(name: impl Into<String>, objects: Vec<PlacedObject>) -> Self {
        Self::Objects {
            name: name.into(),
            objects,
        }
    }

    pub fn tiles(name: impl Into<String>) -> Self {
        Self::Tiles { name: name.into() }
    }
}

impl Layer for MemoryLayer {
    fn name(&self) -> &str {
        match self {
            Self::Group { name, .. } | Self::Objects { name, .. } | Self::Tiles { name } => name,
        }
    }

    fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    fn is_object_layer(&self) -> bool {
        matches!(self, Self::Objects { .. })
    }

    fn child_layers(&self) -> Vec<&dyn Layer> {
        match self {
            Self::Group { children, .. } => {
                children.iter().map(|child| child as &dyn Layer).collect()
            }
            _ => Vec::new(),
        }
    }

    fn objects(&self) -> Vec<PlacedObject> {
        match self {
            Self::Objects { objects, .. } => objects.clone(),
            _ => Vec::new(),
        }
    }
}

/// An in-memory tile-map document.
///
/// Defaults to publish-ready settings (orthogonal, right-down,
/// base64+zlib) with no tilesets, layers, or properties.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    properties: HashMap<String, String>,
    tilesets: Vec<MemoryTileset>,
    layers: Vec<MemoryLayer>,
    settings: DocumentSettings,
    external_tilesets: Vec<String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            tilesets: Vec::new(),
            layers: Vec::new(),
            settings: DocumentSettings {
                orientation: Orientation::Orthogonal,
                render_order: RenderOrder::RightDown,
                layer_format: LayerDataFormat::Base64Zlib,
            },
            external_tilesets: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: DocumentSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_tileset(mut self, tileset: MemoryTileset) -> Self {
        self.tilesets.push(tileset);
        self
    }

    pub fn with_layer(mut self, layer: MemoryLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_external_tileset(mut self, name: impl Into<String>) -> Self {
        self.external_tilesets.push(name.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl TileMapDocument for MemoryDocument {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn set_property(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    fn tileset_names(&self) -> Vec<String> {
        self.tilesets.iter().map(|t| t.name.clone()).collect()
    }

    fn tileset(&self, name: &str) -> Option<&dyn TargetTileset> {
        self.tilesets
            .iter()
            .find(|t| t.name == name)
            .map(|t| t as &dyn TargetTileset)
    }

    fn tileset_mut(&mut self, name: &str) -> Option<&mut dyn TargetTileset> {
        self.tilesets
            .iter_mut()
            .find(|t| t.name == name)
            .map(|t| t as &mut dyn TargetTileset)
    }

    fn add_tileset(&mut self, name: &str) {
        self.tilesets.push(MemoryTileset::new(name));
    }

    fn root_layers(&self) -> Vec<&dyn Layer> {
        self.layers.iter().map(|layer| layer as &dyn Layer).collect()
    }

    fn settings(&self) -> DocumentSettings {
        self.settings
    }

    fn external_tileset_names(&self) -> Vec<String> {
        self.external_tilesets.clone()
    }
}
