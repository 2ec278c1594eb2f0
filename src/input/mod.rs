//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`map::UiCommand`] values.
//! Pure mapping only; the event loop owns the cursor and dispatches.

pub mod map;

pub use map::{map_key, map_mouse, should_quit, CursorMove, UiCommand};
