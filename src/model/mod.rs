//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! the fixed cursor-role table, the scheme store contract, the catalog
//! built from it, and the scheme applicator.
//!
//! The registry-backed store lives in `platform::windows::storage`.

pub mod apply;
pub mod catalog;
pub mod constants;
pub mod roles;
pub mod store;

pub use apply::apply_scheme;
pub use catalog::SchemeCatalog;
pub use constants::*;
pub use roles::CursorRole;
pub use store::SchemeStore;
