//! Reconciliation engine between an engine project and a tile-map document
//!
//! This crate owns the stateful part of tilesync: merging tileset
//! definitions from the engine project's resource graph into the host
//! editor's tile-map document, idempotently and one resource at a time.
//!
//! - **Host abstraction**: the editor's document, tilesets, and layer tree
//!   are externally-owned, identity-bearing objects. They enter through the
//!   [`host`] traits as handles and are only ever mutated through their
//!   setters, never cloned or cached across runs.
//! - **SyncEngine**: enumerates tileset resources, resolves their sprite
//!   image, validates geometry, and applies image path and tile size to the
//!   matching target tileset, creating it when absent. Resource-local
//!   failures are collected into the report; only a broken manifest root
//!   aborts.
//! - **Ignore list**: a persisted, insertion-ordered set of tileset names
//!   the user chose to exclude, round-tripped through a document property.
//! - **Auditor**: walks the layer tree and flags placed objects whose name
//!   matches no engine object definition.
//! - **Publish pre-check**: verifies the document settings the remote
//!   service requires before anything is sent.

pub mod audit;
pub mod error;
pub mod host;
pub mod ignore;
pub mod precheck;
pub mod sync;

pub use audit::{ObjectNameMismatch, audit_document, audit_layers};
pub use error::{Error, Result};
pub use host::{
    DocumentSettings, IGNORED_TILESETS_PROPERTY, Layer, LayerDataFormat, OBJECT_IGNORE_PROPERTY,
    Orientation, PlacedObject, RenderOrder, SECRET_KEY_PROPERTY, TargetTileset, TileMapDocument,
};
pub use ignore::IgnoreList;
pub use precheck::check_publish_ready;
pub use sync::{SkipDecision, SyncEngine, SyncReport};
