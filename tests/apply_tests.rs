//! Tests for the scheme applicator over a writable stub store.

use std::collections::BTreeMap;

use curswitch::model::constants::CURSOR_ROLE_COUNT;
use curswitch::model::{apply_scheme, CursorRole, SchemeCatalog, SchemeStore};

/// In-memory store recording every write. Environment expansion replaces
/// the single token `%SystemRoot%` with `C:\Windows`, which is enough to
/// observe that specifiers are expanded before being written.
#[derive(Default)]
struct MemoryStore {
    schemes: Vec<(String, String)>,
    role_paths: BTreeMap<&'static str, String>,
    active: Option<String>,
    broadcasts: u32,
}

impl MemoryStore {
    fn with_scheme(name: &str, raw: &str) -> Self {
        Self {
            schemes: vec![(name.to_string(), raw.to_string())],
            ..Default::default()
        }
    }

    fn role_path(&self, role: CursorRole) -> Option<&str> {
        self.role_paths.get(role.value_name()).map(String::as_str)
    }
}

impl SchemeStore for MemoryStore {
    fn scheme_names(&self) -> Vec<String> {
        self.schemes.iter().map(|(n, _)| n.clone()).collect()
    }

    fn active_scheme_name(&self) -> Option<String> {
        self.active.clone()
    }

    fn scheme_path_list(&self, name: &str) -> Option<String> {
        self.schemes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, raw)| raw.clone())
    }

    fn set_role_path(&mut self, role: CursorRole, path: &str) {
        self.role_paths.insert(role.value_name(), path.to_string());
    }

    fn set_active_scheme_name(&mut self, name: &str) {
        self.active = Some(name.to_string());
    }

    fn expand_path(&self, spec: &str) -> String {
        spec.replace("%SystemRoot%", "C:\\Windows")
    }

    fn broadcast_change(&mut self) {
        self.broadcasts += 1;
    }
}

#[test]
fn apply_assigns_specifiers_positionally() {
    let mut store = MemoryStore::with_scheme("Aero", "a.cur,b.cur,c.cur");
    apply_scheme(&mut store, "Aero");
    assert_eq!(store.role_path(CursorRole::Arrow), Some("a.cur"));
    assert_eq!(store.role_path(CursorRole::Help), Some("b.cur"));
    assert_eq!(store.role_path(CursorRole::AppStarting), Some("c.cur"));
}

#[test]
fn empty_specifier_writes_explicit_empty_path() {
    let mut store = MemoryStore::with_scheme("Aero", "a.cur,,c.cur");
    apply_scheme(&mut store, "Aero");
    assert_eq!(store.role_path(CursorRole::Help), Some(""));
}

#[test]
fn roles_beyond_specifier_count_keep_previous_values() {
    let mut store = MemoryStore::with_scheme("Short", "a.cur,b.cur");
    store.set_role_path(CursorRole::Wait, "old-wait.cur");
    store.set_role_path(CursorRole::Person, "old-person.cur");

    apply_scheme(&mut store, "Short");

    assert_eq!(store.role_path(CursorRole::Wait), Some("old-wait.cur"));
    assert_eq!(store.role_path(CursorRole::Person), Some("old-person.cur"));
}

#[test]
fn specifiers_beyond_role_count_are_ignored() {
    let raw: Vec<String> = (0..20).map(|i| format!("c{i}.cur")).collect();
    let mut store = MemoryStore::with_scheme("Long", &raw.join(","));

    apply_scheme(&mut store, "Long");

    assert_eq!(store.role_paths.len(), CURSOR_ROLE_COUNT);
    assert_eq!(store.role_path(CursorRole::Person), Some("c16.cur"));
}

#[test]
fn unknown_scheme_is_a_silent_no_op() {
    let mut store = MemoryStore::with_scheme("Aero", "a.cur");
    store.active = Some("Aero".to_string());

    apply_scheme(&mut store, "No Such Scheme");

    assert!(store.role_paths.is_empty());
    assert_eq!(store.active.as_deref(), Some("Aero"));
    assert_eq!(store.broadcasts, 0);
}

#[test]
fn apply_records_the_scheme_name_and_broadcasts() {
    let mut store = MemoryStore::with_scheme("Aero", "a.cur");
    apply_scheme(&mut store, "Aero");
    assert_eq!(store.active.as_deref(), Some("Aero"));
    assert_eq!(store.broadcasts, 1);
}

#[test]
fn apply_is_idempotent() {
    let mut once = MemoryStore::with_scheme("Aero", "a.cur,,%SystemRoot%\\c.cur");
    apply_scheme(&mut once, "Aero");

    let mut twice = MemoryStore::with_scheme("Aero", "a.cur,,%SystemRoot%\\c.cur");
    apply_scheme(&mut twice, "Aero");
    apply_scheme(&mut twice, "Aero");

    assert_eq!(once.role_paths, twice.role_paths);
    assert_eq!(once.active, twice.active);
}

#[test]
fn environment_tokens_are_fully_resolved_before_writing() {
    let mut store = MemoryStore::with_scheme("Aero", "%SystemRoot%\\cursors\\a.cur");
    apply_scheme(&mut store, "Aero");
    let written = store.role_path(CursorRole::Arrow).unwrap();
    assert_eq!(written, "C:\\Windows\\cursors\\a.cur");
    assert!(!written.contains('%'));
}

#[test]
fn end_to_end_default_scheme_scenario() {
    // Store: {"Default": "a.cur,,c.cur"}, active marker "Default".
    let mut store = MemoryStore::with_scheme("Default", "a.cur,,c.cur");
    store.active = Some("Default".to_string());

    let catalog = SchemeCatalog::build(&store);
    assert_eq!(catalog.names, ["Default"]);
    assert_eq!(catalog.current, Some(0));

    apply_scheme(&mut store, "Default");

    assert_eq!(store.role_path(CursorRole::Arrow), Some("a.cur"));
    assert_eq!(store.role_path(CursorRole::Help), Some(""));
    assert_eq!(store.role_path(CursorRole::AppStarting), Some("c.cur"));
    // Roles 3..16 were never specified and stay untouched.
    for role in CursorRole::ALL.iter().skip(3) {
        assert_eq!(store.role_path(*role), None);
    }
    assert_eq!(store.active.as_deref(), Some("Default"));
    assert_eq!(store.broadcasts, 1);
}
