//! Contract for the scheme store.
//!
//! The production implementation reads and writes the HKCU cursor keys
//! (`platform::windows::storage::registry`); tests substitute an in-memory
//! store. Every operation degrades silently: a store that cannot be opened
//! behaves as "no schemes available" and writes become no-ops, matching how
//! the Control Panel keys are treated as best-effort.

use super::roles::CursorRole;

pub trait SchemeStore {
    /// Names of all installed schemes, in store enumeration order (not
    /// sorted). Empty when the schemes location is missing or unreadable.
    fn scheme_names(&self) -> Vec<String>;

    /// Name marker of the currently active scheme, if one is recorded.
    fn active_scheme_name(&self) -> Option<String>;

    /// Raw comma-separated path list for a scheme, if present.
    fn scheme_path_list(&self, name: &str) -> Option<String>;

    /// Write one role's cursor path into the active configuration. An empty
    /// path is stored as an explicit empty string, not removed.
    fn set_role_path(&mut self, role: CursorRole, path: &str);

    /// Record `name` as the active scheme.
    fn set_active_scheme_name(&mut self, name: &str);

    /// Expand environment-variable tokens in a path specifier, bounded by
    /// `MAX_CURSOR_PATH_LEN`. A specifier without tokens comes back as-is.
    fn expand_path(&self, spec: &str) -> String;

    /// Tell the session that cursor resources changed: reload them live and
    /// persist the change to the user profile.
    fn broadcast_change(&mut self);
}
