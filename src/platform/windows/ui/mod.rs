//! UI components for Windows.

pub mod main_window;
pub mod tray;

pub use main_window::*;
pub use tray::*;
