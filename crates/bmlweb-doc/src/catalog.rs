//! Resource catalog supplied to the rewriter.

use std::collections::BTreeMap;

use serde::Serialize;

/// Per-file record. Carries no data today; serializes as `{}` so the
/// JSON projection matches what the in-page runtime expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileEntry {}

/// Nested, case-insensitive catalog of available broadcast resources:
/// 2-character component code, 4-character module code, filename.
///
/// Built once by an external directory scan at startup and passed
/// read-only into the rewriter; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceCatalog {
    components: BTreeMap<String, BTreeMap<String, BTreeMap<String, FileEntry>>>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file. Keys are lowercased, which is what makes later
    /// lookups case-insensitive.
    pub fn insert(&mut self, component: &str, module: &str, filename: &str) {
        self.components
            .entry(component.to_ascii_lowercase())
            .or_default()
            .entry(module.to_ascii_lowercase())
            .or_default()
            .insert(filename.to_ascii_lowercase(), FileEntry {});
    }

    pub fn contains(&self, component: &str, module: &str, filename: &str) -> bool {
        self.components
            .get(&component.to_ascii_lowercase())
            .and_then(|modules| modules.get(&module.to_ascii_lowercase()))
            .is_some_and(|files| files.contains_key(&filename.to_ascii_lowercase()))
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
