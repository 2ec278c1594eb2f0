//! Terminal tic-tac-toe with undo history and shareable replay links.
//!
//! The logical core (`core`) is pure and synchronous; `replay` is the
//! fixed-schema codec between game state and the `replay` URL query
//! parameter; `term` and `input` are the terminal front end.

pub mod core;
pub mod input;
pub mod replay;
pub mod term;
pub mod types;
