//! SyncEngine implementation
//!
//! The SyncEngine merges tileset definitions from the engine project's
//! resource graph into the host document's tileset collection. The merge is
//! one-directional (the engine project is the source of truth) and
//! idempotent: running it twice over an unchanged manifest reports no
//! further updates.
//!
//! Per-resource failures never abort a run; they are collected into the
//! [`SyncReport`] for one end-of-run summary. Only a manifest that cannot
//! be loaded at the root is structural.

use std::collections::HashSet;

use serde::Serialize;

use tilesync_manifest::{Finding, NormalizedPath, ResourceGraph, ResourceKind, validate};

use crate::Result;
use crate::audit::{ObjectNameMismatch, audit_document};
use crate::host::{IGNORED_TILESETS_PROPERTY, TileMapDocument};
use crate::ignore::IgnoreList;

/// Caller decision for a blocking compatibility finding.
///
/// Interactive hosts put a prompt behind this; tests supply a closure. The
/// engine itself stays deterministic either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDecision {
    /// Skip the resource this run only
    Skip,
    /// Skip and add the resource to the persisted ignore list
    SkipAndRemember,
}

/// Report from a reconciliation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Tilesets newly added to the document's collection
    pub created: Vec<String>,
    /// Tilesets whose image path actually changed value
    pub updated: Vec<String>,
    /// Validation findings, blocking and informational
    pub findings: Vec<Finding>,
    /// Resource-local failures collected during the run
    pub errors: Vec<String>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any image path changed value this run.
    ///
    /// The host cannot re-apply an image path mid-session without a
    /// document reload, so the caller uses this to decide whether to show
    /// the reload notice.
    pub fn image_changed(&self) -> bool {
        !self.updated.is_empty()
    }

    /// Whether the run completed without collecting any failures.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Engine for reconciling a tile-map document against an engine project.
#[derive(Debug)]
pub struct SyncEngine {
    graph: ResourceGraph,
}

impl SyncEngine {
    /// Create an engine over an already-loaded resource graph.
    pub fn new(graph: ResourceGraph) -> Self {
        Self { graph }
    }

    /// Load the manifest at `manifest_path` and build an engine for it.
    ///
    /// # Errors
    ///
    /// Returns an error when the root manifest is unreadable or malformed.
    /// This aborts the whole operation; no partial reconciliation happens.
    pub fn load(manifest_path: &NormalizedPath) -> Result<Self> {
        Ok(Self::new(ResourceGraph::load(manifest_path)?))
    }

    /// The underlying resource graph.
    pub fn graph(&self) -> &ResourceGraph {
        &self.graph
    }

    /// Reconcile the document's tileset collection with the engine project.
    ///
    /// For each TileSet resource, in manifest order:
    ///
    /// 1. skip it when its name is on the persisted ignore list
    /// 2. resolve its sprite down to a composited image path
    /// 3. validate geometry; `on_blocking` decides whether a blocking
    ///    finding is also remembered on the ignore list
    /// 4. look up the target tileset by name, creating it when absent
    /// 5. apply image path and tile size; the name is recorded as updated
    ///    only when the image path changed value
    ///
    /// The ignore list is read from the document property at the start and
    /// rewritten in full at the end. Each resource is visited exactly once.
    pub fn reconcile(
        &self,
        doc: &mut dyn TileMapDocument,
        on_blocking: &mut dyn FnMut(&Finding) -> SkipDecision,
    ) -> Result<SyncReport> {
        let mut ignore = IgnoreList::parse(doc.property(IGNORED_TILESETS_PROPERTY).as_deref());
        let mut report = SyncReport::new();

        for entry in self.graph.entries_of_kind(ResourceKind::TileSet) {
            let tileset = match self.graph.load_tileset(entry) {
                Ok(tileset) => tileset,
                Err(e) => {
                    tracing::warn!(key = %entry.key, "skipping unreadable tileset: {e}");
                    report.errors.push(format!("{}: {e}", entry.key));
                    continue;
                }
            };

            if ignore.contains(&tileset.name) {
                tracing::debug!(tileset = %tileset.name, "on ignore list, skipping");
                continue;
            }

            let resolved = match self.graph.sprite_for(&tileset) {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::warn!(tileset = %tileset.name, "sprite resolution failed: {e}");
                    report.errors.push(format!("{}: {e}", tileset.name));
                    continue;
                }
            };

            let existing_margin = doc.tileset(&tileset.name).map(|t| t.margin());
            let mut blocked = false;
            for finding in validate(&tileset, existing_margin) {
                if finding.is_blocking() {
                    if on_blocking(&finding) == SkipDecision::SkipAndRemember {
                        ignore.remember(&tileset.name);
                        tracing::debug!(tileset = %tileset.name, "added to ignore list");
                    }
                    blocked = true;
                }
                report.findings.push(finding);
            }
            if blocked {
                continue;
            }

            // Creation happens before geometry is applied, so a new entry
            // always ends up with the computed size below.
            if doc.tileset(&tileset.name).is_none() {
                doc.add_tileset(&tileset.name);
                report.created.push(tileset.name.clone());
                tracing::info!(tileset = %tileset.name, "created target tileset");
            }
            let Some(target) = doc.tileset_mut(&tileset.name) else {
                report
                    .errors
                    .push(format!("{}: host did not provide the tileset", tileset.name));
                continue;
            };

            let image = resolved.image_path();
            if target.image_path() != Some(image.as_str()) {
                report.updated.push(tileset.name.clone());
                tracing::info!(tileset = %tileset.name, image = %image, "image path updated");
            }
            target.set_image_path(image.as_str());
            target.set_tile_size(tileset.tile_width, tileset.tile_height);
        }

        doc.set_property(IGNORED_TILESETS_PROPERTY, &ignore.serialize());
        Ok(report)
    }

    /// Audit placed objects against the engine project's object names.
    ///
    /// Runs independently of tileset reconciliation.
    pub fn audit_objects(&self, doc: &dyn TileMapDocument) -> Vec<ObjectNameMismatch> {
        let valid_names: HashSet<String> = self.graph.object_names().into_iter().collect();
        audit_document(doc, &valid_names)
    }
}
