//! Windows runtime state management.
//!
//! Everything runs on the one thread that owns the window and its message
//! queue, so state lives in a thread-local rather than behind a lock.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

/// State shared between the window procedure and the entry point.
#[allow(dead_code)]
pub struct RuntimeState {
    /// The one top-level window.
    pub hwnd: HWND,
    /// Catalog snapshot backing the listbox, taken once at startup.
    /// Listbox item index i corresponds to scheme_names[i].
    pub scheme_names: Vec<String>,
    /// When set, the close button hides the window instead of quitting;
    /// the tray icon remains the way back in.
    pub hide_on_close: bool,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            hwnd: HWND::default(),
            scheme_names: Vec::new(),
            hide_on_close: false,
        }
    }
}

thread_local! {
    /// Global application state, owned by the UI thread.
    pub static STATE: RefCell<RuntimeState> = RefCell::new(RuntimeState::default());
}
