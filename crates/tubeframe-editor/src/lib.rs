//! Tubeframe Editor State
//!
//! Headless editing layer for tube frame workspaces: application state,
//! actions, snapshot history, and the editor facade that ties them together.

pub mod action;
pub mod editor;
pub mod history;
pub mod state;

// Re-exports for convenience
pub use action::{Action, StateError};
pub use editor::Editor;
pub use history::{DEFAULT_HISTORY_CAPACITY, History};
pub use state::{AppState, CameraMode, CameraSettings, ViewMode, ViewSettings};
