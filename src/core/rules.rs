//! Win detection over the eight fixed lines of the 3x3 grid.

use crate::core::Board;
use crate::types::Player;

/// The eight index triples that constitute a win: three rows, three
/// columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the winning line, if any.
///
/// Returns the player together with the completed triple. Scans the fixed
/// line table in order; the first uniform non-empty triple wins (board
/// states reachable through play never contain two winners for different
/// players).
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(player) = board.get(a).flatten() {
            if board.get(b).flatten() == Some(player) && board.get(c).flatten() == Some(player) {
                return Some((player, line));
            }
        }
    }
    None
}

/// Check whether the board has a winner.
///
/// Returns `Some(player)` if any of the eight lines is uniform and
/// non-empty, `None` otherwise. Pure; fixed eight comparisons.
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
