//! Full-state snapshots taken before each accepted move.
//!
//! Undo restores these wholesale. A snapshot is a small `Copy` value and
//! the stack never holds more than 9 of them.

use crate::core::Board;
use crate::types::{Cell, CELL_COUNT};

/// State immediately before a move: the grid and whose turn it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSnapshot {
    pub cells: [Cell; CELL_COUNT],
    pub x_is_next: bool,
}

impl MoveSnapshot {
    /// Capture the current board and turn flag.
    pub fn capture(board: &Board, x_is_next: bool) -> Self {
        Self {
            cells: *board.cells(),
            x_is_next,
        }
    }

    /// Rebuild the board this snapshot was taken from.
    pub fn board(&self) -> Board {
        Board::from_cells(self.cells)
    }
}
