//! Descriptor types parsed from engine project JSON
//!
//! Each engine entity lives in its own JSON file. The root manifest lists
//! every resource with a lookup key, a type tag, and a path relative to the
//! manifest's directory. Descriptors are immutable after parse; this crate
//! holds a read-only mirror of engine state.

use serde::{Deserialize, Deserializer};

/// Type tag of a manifest resource.
///
/// The vocabulary is fixed; any tag this crate does not know collapses to
/// [`ResourceKind::Other`] rather than failing the parse, so new engine
/// resource types never break reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    TileSet,
    Sprite,
    Object,
    Other,
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "TileSet" => Self::TileSet,
            "Sprite" => Self::Sprite,
            "Object" => Self::Object,
            _ => Self::Other,
        })
    }
}

/// The root manifest document: a flat list of resource entries.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDoc {
    pub resources: Vec<ResourceEntry>,
}

/// One `{Key, Value}` entry in the manifest's resource list.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: ResourceLocation,
}

/// Where a resource's own descriptor file lives and what kind it is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLocation {
    pub resource_type: ResourceKind,
    /// Path to the descriptor file, relative to the manifest's directory
    pub resource_path: String,
}

/// A tileset resource descriptor.
///
/// `sprite_ref` is a weak lookup key into the manifest, not ownership of
/// the sprite.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSetDescriptor {
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
    pub h_separation: u32,
    pub v_separation: u32,
    pub sprite_ref: String,
}

/// A sprite resource descriptor. The first frame is authoritative.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteDescriptor {
    pub name: String,
    pub frames: Vec<SpriteFrame>,
}

impl SpriteDescriptor {
    /// The authoritative frame, if the sprite has any.
    pub fn first_frame(&self) -> Option<&SpriteFrame> {
        self.frames.first()
    }
}

/// One frame of a sprite, identified by its composited image id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteFrame {
    pub composite_image_id: String,
}

/// An object resource descriptor. Only the name matters for auditing.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDescriptor {
    pub name: String,
}
