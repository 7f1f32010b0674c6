//! Catalog of installed schemes plus the active selection.

use super::store::SchemeStore;

/// Snapshot of the scheme list, taken once at startup. External edits made
/// after the snapshot are not observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeCatalog {
    /// Scheme names in store enumeration order.
    pub names: Vec<String>,
    /// Index of the active scheme in `names`, by exact name match against
    /// the store's marker. A configuration whose role paths merely coincide
    /// with some scheme, without the marker, yields no selection.
    pub current: Option<usize>,
}

impl SchemeCatalog {
    pub fn build<S: SchemeStore>(store: &S) -> Self {
        let names = store.scheme_names();
        let current = store
            .active_scheme_name()
            .and_then(|active| names.iter().position(|n| *n == active));
        Self { names, current }
    }

    /// Scheme name at `index`, if in range.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}
