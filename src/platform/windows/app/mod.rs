//! Runtime state for the Windows application.

pub mod state;

pub use state::{RuntimeState, STATE};
