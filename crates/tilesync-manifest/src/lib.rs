//! Engine project manifest parsing and resource graph resolution
//!
//! This crate reads the root manifest of a game-engine project (a JSON
//! document enumerating every resource with a key, a type tag, and a
//! relative path) and resolves typed sub-resources from it:
//!
//! - [`reader`] — all-or-nothing JSON descriptor loading
//! - [`schema`] — descriptor types (`TileSetDescriptor`, `SpriteDescriptor`, ...)
//! - [`graph`] — key-indexed [`ResourceGraph`] with typed resolution chains
//! - [`validate`] — geometric compatibility checks against the map editor's
//!   uniform offset/separation tileset model
//! - [`path`] — normalized forward-slash paths with a pure `join`
//!
//! The engine project is always the source of truth; nothing here writes
//! back to it.

pub mod error;
pub mod graph;
pub mod path;
pub mod reader;
pub mod schema;
pub mod validate;

pub use error::{Error, Result};
pub use graph::{ResolvedSprite, ResourceGraph, frame_image_path};
pub use path::NormalizedPath;
pub use schema::{
    ManifestDoc, ObjectDescriptor, ResourceEntry, ResourceKind, ResourceLocation,
    SpriteDescriptor, SpriteFrame, TileSetDescriptor,
};
pub use validate::{Finding, FindingKind, validate};
