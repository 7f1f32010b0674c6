//! Windows-specific implementation using Win32 and the registry.
//!
//! This module contains all Windows-specific code:
//! - Storage (registry scheme store, change broadcast)
//! - UI components (scheme list window, tray icon with context menu)
//! - Runtime state (window handle, catalog snapshot, close suppression)

pub mod app;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use storage::*;
pub use ui::*;
