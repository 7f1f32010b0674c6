//! Scheme storage for Windows.
//!
//! Reads and writes the cursor keys under HKEY_CURRENT_USER.

mod registry;

pub use registry::RegistrySchemeStore;
