//! Platform-specific implementations.
//!
//! Cursor schemes are a Windows registry concept, so only a Windows
//! implementation exists. The submodule covers:
//! - Storage (registry-backed scheme store)
//! - UI components (main window, tray icon)
//! - Runtime state

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;
