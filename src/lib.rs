//! Pure model plus the Windows platform layer. Keep this file free of Win32
//! FFI so tests can run as normal integration tests on any host.

pub mod model;
pub mod platform;

// Re-export model types for convenience
pub use model::{apply_scheme, CursorRole, SchemeCatalog, SchemeStore};
