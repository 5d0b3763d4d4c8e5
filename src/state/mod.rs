//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod filter_cycle;
pub mod search_input;

// Re-export for convenience
pub use app_state::{AppState, Overlay};
pub use search_input::{SearchEdit, SearchInput};
