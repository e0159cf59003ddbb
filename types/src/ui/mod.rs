//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod input;
mod view_state;

pub use input::{CursorMove, DraftInput, FieldId};
pub use view_state::UiOptions;
