//! Object name auditing across the document's layer tree
//!
//! Placed objects on object layers are expected to name an object defined
//! in the engine project; anything else is a typo waiting to break the
//! game's import. The walk is depth-first pre-order over the strict layer
//! hierarchy, so diagnostics come out in a stable, reproducible order.

use std::collections::HashSet;

use serde::Serialize;

use crate::host::{Layer, TileMapDocument};

/// A placed object whose name has no matching engine object definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectNameMismatch {
    /// The offending object's name, `None` when it has no name at all
    pub object_name: Option<String>,
    /// Slash-joined path of the layer holding the object, from the root
    pub layer_path: String,
}

impl std::fmt::Display for ObjectNameMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.object_name {
            Some(name) => write!(f, "Object named '{}' on layer {}", name, self.layer_path),
            None => write!(f, "Object with no name on layer {}", self.layer_path),
        }
    }
}

/// Audit every object layer reachable from the document root.
pub fn audit_document(
    doc: &dyn TileMapDocument,
    valid_names: &HashSet<String>,
) -> Vec<ObjectNameMismatch> {
    audit_layers(&doc.root_layers(), valid_names)
}

/// Audit a slice of sibling layers in declaration order.
pub fn audit_layers(
    layers: &[&dyn Layer],
    valid_names: &HashSet<String>,
) -> Vec<ObjectNameMismatch> {
    let mut mismatches = Vec::new();
    for layer in layers {
        walk(*layer, "", valid_names, &mut mismatches);
    }
    mismatches
}

fn walk(
    layer: &dyn Layer,
    prefix: &str,
    valid_names: &HashSet<String>,
    out: &mut Vec<ObjectNameMismatch>,
) {
    let path = if prefix.is_empty() {
        layer.name().to_string()
    } else {
        format!("{prefix}/{}", layer.name())
    };

    if layer.is_group() {
        for child in layer.child_layers() {
            walk(child, &path, valid_names, out);
        }
        return;
    }

    if !layer.is_object_layer() {
        return;
    }

    for object in layer.objects() {
        if object.sync_ignored {
            continue;
        }
        let matches = object
            .name
            .as_ref()
            .is_some_and(|name| valid_names.contains(name));
        if !matches {
            out.push(ObjectNameMismatch {
                object_name: object.name,
                layer_path: path.clone(),
            });
        }
    }
}
