//! Model-level constants.

/// Number of cursor roles a scheme can address. Scheme path lists are
/// comma-separated and positional; entries beyond this count are ignored.
pub const CURSOR_ROLE_COUNT: usize = 17;

/// Per-role cap on an expanded cursor path, in UTF-16 units including the
/// terminator (legacy MAX_PATH).
pub const MAX_CURSOR_PATH_LEN: usize = 260;

/// Registry subkey (under HKCU) listing the installed schemes, one named
/// value per scheme.
pub const SCHEMES_SUBKEY: &str = "Control Panel\\Cursors\\Schemes";

/// Registry subkey (under HKCU) holding the active configuration: one
/// per-role path value plus the scheme name as the unnamed default value.
pub const ACTIVE_SUBKEY: &str = "Control Panel\\Cursors";
