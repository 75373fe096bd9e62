//! Key-indexed resource graph over an engine project manifest
//!
//! The manifest is a flat list of `{key, location}` entries; cross-resource
//! references (a tileset's `spriteRef`) are string keys into that list. The
//! graph builds a key index once per load so every resolution is O(1), and
//! exposes typed loaders for the resource kinds reconciliation cares about.

use std::collections::HashMap;

use crate::path::NormalizedPath;
use crate::reader;
use crate::schema::{
    ManifestDoc, ObjectDescriptor, ResourceEntry, ResourceKind, SpriteDescriptor,
    TileSetDescriptor,
};
use crate::{Error, Result};

/// A loaded manifest with its key index and base directory.
///
/// Entries keep the manifest's own order; reconciliation iterates them
/// as-declared so runs are reproducible.
#[derive(Debug, Clone)]
pub struct ResourceGraph {
    /// Directory containing the manifest; all resource paths are relative to it
    dir: NormalizedPath,
    entries: Vec<ResourceEntry>,
    /// Key -> position in `entries`, built once per load
    index: HashMap<String, usize>,
}

impl ResourceGraph {
    /// Load the manifest at `manifest_path` and build the key index.
    ///
    /// A failure here is structural: without a readable root manifest there
    /// is nothing to reconcile.
    pub fn load(manifest_path: &NormalizedPath) -> Result<Self> {
        let doc: ManifestDoc = reader::read_json(manifest_path)?;
        let dir = manifest_path
            .parent()
            .unwrap_or_else(|| NormalizedPath::new("."));

        let mut index = HashMap::with_capacity(doc.resources.len());
        for (position, entry) in doc.resources.iter().enumerate() {
            index.insert(entry.key.clone(), position);
        }

        tracing::debug!(
            resources = doc.resources.len(),
            dir = %dir,
            "loaded engine project manifest"
        );

        Ok(Self {
            dir,
            entries: doc.resources,
            index,
        })
    }

    /// Directory the manifest lives in.
    pub fn dir(&self) -> &NormalizedPath {
        &self.dir
    }

    /// All manifest entries, in manifest order.
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Resolve an entry by its manifest key.
    pub fn resolve_by_key(&self, key: &str) -> Option<&ResourceEntry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    /// Iterate entries of one resource kind, in manifest order.
    ///
    /// Each call re-filters the entry list, so the sequence is re-enumerable.
    pub fn entries_of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &ResourceEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.value.resource_type == kind)
    }

    /// Absolute path of an entry's descriptor file.
    ///
    /// Pure join of the manifest directory and the stored relative path.
    pub fn descriptor_path(&self, entry: &ResourceEntry) -> NormalizedPath {
        self.dir.join(&entry.value.resource_path)
    }

    /// Load the tileset descriptor behind a manifest entry.
    pub fn load_tileset(&self, entry: &ResourceEntry) -> Result<TileSetDescriptor> {
        reader::read_json(&self.descriptor_path(entry))
    }

    /// Load the object descriptor behind a manifest entry.
    pub fn load_object(&self, entry: &ResourceEntry) -> Result<ObjectDescriptor> {
        reader::read_json(&self.descriptor_path(entry))
    }

    /// Resolve a tileset's sprite reference down to a loaded sprite.
    ///
    /// # Errors
    ///
    /// - [`Error::DanglingReference`] when `sprite_ref` matches no entry
    /// - [`Error::NoFrames`] when the sprite has an empty frame list
    /// - read errors from the sprite's own descriptor file
    ///
    /// All of these are local to the owning tileset.
    pub fn sprite_for(&self, tileset: &TileSetDescriptor) -> Result<ResolvedSprite> {
        let entry = self
            .resolve_by_key(&tileset.sprite_ref)
            .ok_or_else(|| Error::DanglingReference {
                key: tileset.sprite_ref.clone(),
            })?;

        let path = self.descriptor_path(entry);
        let sprite: SpriteDescriptor = reader::read_json(&path)?;
        let first_frame_id = match sprite.first_frame() {
            Some(frame) => frame.composite_image_id.clone(),
            None => {
                return Err(Error::NoFrames { name: sprite.name });
            }
        };
        let dir = path.parent().unwrap_or_else(|| self.dir.clone());

        Ok(ResolvedSprite {
            sprite,
            dir,
            first_frame_id,
        })
    }

    /// Names of every Object-typed resource, in manifest order.
    ///
    /// Unreadable object descriptors are logged and skipped; one broken
    /// object must not hide the rest from the auditor.
    pub fn object_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for entry in self.entries_of_kind(ResourceKind::Object) {
            match self.load_object(entry) {
                Ok(object) => names.push(object.name),
                Err(e) => {
                    tracing::warn!(key = %entry.key, "skipping unreadable object descriptor: {e}");
                }
            }
        }
        names
    }
}

/// A sprite resolved from a tileset reference, with enough context to
/// compute its on-disk image path.
#[derive(Debug, Clone)]
pub struct ResolvedSprite {
    pub sprite: SpriteDescriptor,
    /// Directory of the sprite's descriptor file
    pub dir: NormalizedPath,
    /// Image id of the authoritative first frame
    first_frame_id: String,
}

impl ResolvedSprite {
    /// Path of the composited image backing the first frame.
    pub fn image_path(&self) -> NormalizedPath {
        frame_image_path(&self.dir, &self.first_frame_id)
    }
}

/// Compute a frame's composited image path from its sprite's directory.
///
/// Pure; the image file is not checked for existence.
pub fn frame_image_path(sprite_dir: &NormalizedPath, frame_id: &str) -> NormalizedPath {
    sprite_dir.join(&format!("{frame_id}.png"))
}
