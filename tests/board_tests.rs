//! Board tests - flat 3x3 grid semantics

use tui_tictactoe::core::Board;
use tui_tictactoe::types::{Player, CELL_COUNT, GRID_WIDTH};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for idx in 0..CELL_COUNT {
        assert!(board.is_open(idx), "cell {} should be open", idx);
        assert_eq!(board.get(idx), Some(None));
    }
    assert!(!board.is_full());
}

#[test]
fn test_row_major_indexing() {
    // Index 0-8 maps row-major onto the 3x3 layout.
    for row in 0..GRID_WIDTH {
        for col in 0..GRID_WIDTH {
            assert_eq!(Board::index(row, col), Some(row * 3 + col));
        }
    }
    assert_eq!(Board::index(3, 0), None);
    assert_eq!(Board::index(0, 3), None);
}

#[test]
fn test_set_get_roundtrip() {
    let mut board = Board::new();

    assert!(board.set(0, Some(Player::X)));
    assert!(board.set(8, Some(Player::O)));

    assert_eq!(board.get(0), Some(Some(Player::X)));
    assert_eq!(board.get(8), Some(Some(Player::O)));
    assert!(!board.is_open(0));
    assert!(board.is_open(4));
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::new();

    assert_eq!(board.get(CELL_COUNT), None);
    assert!(!board.set(CELL_COUNT, Some(Player::X)));
    assert!(!board.is_open(CELL_COUNT));
}

#[test]
fn test_from_cells_preserves_layout() {
    let mut cells = [None; CELL_COUNT];
    cells[4] = Some(Player::X);
    cells[6] = Some(Player::O);

    let board = Board::from_cells(cells);
    assert_eq!(board.cells(), &cells);
    assert_eq!(board.get(4), Some(Some(Player::X)));
    assert_eq!(board.get(6), Some(Some(Player::O)));
}

#[test]
fn test_is_full() {
    let board = Board::from_cells([Some(Player::X); CELL_COUNT]);
    assert!(board.is_full());

    let mut cells = [Some(Player::O); CELL_COUNT];
    cells[3] = None;
    assert!(!Board::from_cells(cells).is_full());
}
