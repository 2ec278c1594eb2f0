//! Game state module - manages the complete game state
//!
//! Owns the board, the turn flag, and the move-history stack. All state
//! transitions are synchronous and report acceptance; rejected inputs leave
//! the state untouched.

use arrayvec::ArrayVec;

use crate::core::{rules, Board, MoveSnapshot};
use crate::types::{GameAction, GameStatus, Player, CELL_COUNT};

/// Complete game state.
///
/// One instance per game session; created at startup (fresh or from a
/// replay link) and owned by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    x_is_next: bool,
    /// Pre-move snapshots, oldest first. Each accepted move fills exactly
    /// one cell and each undo re-opens one, so the stack length always
    /// equals the number of occupied cells and 9 bounds it.
    history: ArrayVec<MoveSnapshot, CELL_COUNT>,
}

impl GameState {
    /// Create a fresh game: empty board, X to move, empty history.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_is_next: true,
            history: ArrayVec::new(),
        }
    }

    /// Adopt a board and turn flag restored from a replay link.
    ///
    /// The history starts empty: a restored state has no moves to undo.
    pub fn from_replay(board: Board, x_is_next: bool) -> Self {
        Self {
            board,
            x_is_next,
            history: ArrayVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        if self.x_is_next {
            Player::X
        } else {
            Player::O
        }
    }

    /// Number of snapshots on the history stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether undo would do anything.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Derived status: winner if a line is complete, otherwise whose turn.
    pub fn status(&self) -> GameStatus {
        match rules::winner(&self.board) {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress(self.current_player()),
        }
    }

    /// Try to claim the cell at `idx` for the current player.
    ///
    /// Rejected (returns false, no state change) when the game already has
    /// a winner, the index is out of range, or the cell is occupied.
    /// On acceptance the pre-move state is pushed onto the history stack,
    /// the cell is written, and the turn flag flips.
    pub fn place(&mut self, idx: usize) -> bool {
        if rules::winner(&self.board).is_some() || !self.board.is_open(idx) {
            return false;
        }

        self.history
            .push(MoveSnapshot::capture(&self.board, self.x_is_next));
        self.board.set(idx, Some(self.current_player()));
        self.x_is_next = !self.x_is_next;
        true
    }

    /// Pop the most recent snapshot and restore it.
    ///
    /// No-op (returns false) when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.board = snapshot.board();
                self.x_is_next = snapshot.x_is_next;
                true
            }
            None => false,
        }
    }

    /// Apply a game action, reporting whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Place(idx) => self.place(idx),
            GameAction::Undo => self.undo(),
            GameAction::Restart => {
                *self = Self::new();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
