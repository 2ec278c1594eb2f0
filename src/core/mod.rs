//! Core module - pure game logic with no I/O dependencies
//!
//! Board storage, win detection, the move/undo controller, and the
//! history snapshots live here. Nothing in this module touches the
//! terminal, the clipboard, or the replay wire format.

pub mod board;
pub mod game_state;
pub mod rules;
pub mod snapshot;

pub use board::Board;
pub use game_state::GameState;
pub use snapshot::MoveSnapshot;
