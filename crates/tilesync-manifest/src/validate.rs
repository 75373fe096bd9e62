//! Geometric compatibility checks for tileset descriptors
//!
//! The map editor's tileset model only supports a uniform margin and a
//! uniform spacing, so engine tilesets with asymmetric offsets or
//! separations cannot be represented and must be skipped. Rules run in a
//! fixed order and the first blocking finding ends evaluation for that
//! resource.

use serde::Serialize;

use crate::schema::TileSetDescriptor;

/// Classification of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingKind {
    /// `xOffset != yOffset`; the resource is excluded from this pass
    OffsetMismatch,
    /// `hSeparation != vSeparation`; the resource is excluded from this pass
    SeparationMismatch,
    /// Non-zero offset differing from the target tileset's margin; the
    /// offset is never auto-applied and must be corrected by hand
    NonZeroOffsetWarning,
}

impl FindingKind {
    /// Blocking findings exclude the resource from reconciliation.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, FindingKind::NonZeroOffsetWarning)
    }
}

/// One validation finding for one resource. Ephemeral, produced per run.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Name of the tileset resource the finding applies to
    pub resource: String,
    pub kind: FindingKind,
    /// Human-readable description for the end-of-run summary
    pub message: String,
}

impl Finding {
    fn new(resource: &str, kind: FindingKind, message: String) -> Self {
        Self {
            resource: resource.to_string(),
            kind,
            message,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.kind.is_blocking()
    }
}

/// Validate a tileset descriptor against the editor's geometry model.
///
/// `existing_margin` is the current margin of the target tileset with the
/// same name, when one already exists in the document. A resource with no
/// counterpart yet skips the offset warning: there is nothing to compare
/// against, and a freshly created tileset starts at margin zero anyway.
pub fn validate(tileset: &TileSetDescriptor, existing_margin: Option<u32>) -> Vec<Finding> {
    if tileset.x_offset != tileset.y_offset {
        return vec![Finding::new(
            &tileset.name,
            FindingKind::OffsetMismatch,
            format!(
                "Tileset '{}' has different x and y offsets ({} vs {}); only uniform offsets are supported",
                tileset.name, tileset.x_offset, tileset.y_offset
            ),
        )];
    }

    if tileset.h_separation != tileset.v_separation {
        return vec![Finding::new(
            &tileset.name,
            FindingKind::SeparationMismatch,
            format!(
                "Tileset '{}' has different h and v separation ({} vs {}); only uniform spacing is supported",
                tileset.name, tileset.h_separation, tileset.v_separation
            ),
        )];
    }

    if tileset.x_offset != 0 && existing_margin.is_some_and(|margin| margin != tileset.x_offset) {
        return vec![Finding::new(
            &tileset.name,
            FindingKind::NonZeroOffsetWarning,
            format!(
                "Tileset '{}' has a non-zero offset of {}; the target tileset's margin must be set by hand",
                tileset.name, tileset.x_offset
            ),
        )];
    }

    Vec::new()
}
