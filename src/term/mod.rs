//! Terminal rendering module.
//!
//! `fb` holds the styled-glyph framebuffer, `game_view` draws the game
//! into one, and `renderer` flushes frames to the terminal with diffed
//! redraws.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::TerminalRenderer;
