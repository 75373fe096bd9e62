//! Persistent ignore list for excluded tilesets
//!
//! Users can exclude individual tilesets from reconciliation ("skip and
//! remember"). The set survives between runs as a comma-joined string
//! property on the document: loaded at the start of a run, rewritten in
//! full at the end. Entries are unique and keep insertion order so the
//! serialized form is deterministic.

/// Insertion-ordered set of tileset names excluded from sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    names: Vec<String>,
}

impl IgnoreList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the serialized property value.
    ///
    /// `None` or an empty string yields an empty list. Blank segments from
    /// stray commas are dropped; duplicates collapse to their first
    /// occurrence.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut list = Self::new();
        if let Some(raw) = raw {
            for segment in raw.split(',') {
                let name = segment.trim();
                if !name.is_empty() {
                    list.remember(name);
                }
            }
        }
        list
    }

    /// Whether `name` is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add `name` to the list. Idempotent; returns true when newly added.
    pub fn remember(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Serialize back to the comma-joined property form, insertion order.
    pub fn serialize(&self) -> String {
        self.names.join(",")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
