//! Scheme applicator: push one scheme's per-role paths into the active
//! configuration and broadcast the change.

use super::constants::CURSOR_ROLE_COUNT;
use super::roles::CursorRole;
use super::store::SchemeStore;

/// Apply the named scheme.
///
/// The raw path list is split on commas and walked positionally: specifier
/// *i* goes to role *i*. An empty specifier writes an explicit empty path;
/// anything else is environment-expanded first. Specifiers beyond the role
/// count are ignored, and roles beyond the specifier count keep their
/// previous value. An unknown scheme name is a no-op.
///
/// Per-role writes are independent and best-effort; there is no rollback if
/// a later write fails after earlier ones took effect.
pub fn apply_scheme<S: SchemeStore>(store: &mut S, name: &str) {
    let Some(raw) = store.scheme_path_list(name) else {
        return;
    };

    for (i, spec) in raw.split(',').take(CURSOR_ROLE_COUNT).enumerate() {
        let Some(role) = CursorRole::from_position(i) else {
            break;
        };
        if spec.is_empty() {
            store.set_role_path(role, "");
        } else {
            let expanded = store.expand_path(spec);
            store.set_role_path(role, &expanded);
        }
    }

    store.set_active_scheme_name(name);
    store.broadcast_change();
}
