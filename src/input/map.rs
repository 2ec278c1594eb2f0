//! Key and mouse mapping from terminal events to UI commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::term::BoardLayout;
use crate::types::GameAction;

/// Where the keyboard cursor should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Commands the event loop understands.
///
/// `Game` commands go straight to the game state; the rest are shell
/// concerns (cursor, clipboard, lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Game(GameAction),
    Cursor(CursorMove),
    /// Place at the current keyboard cursor.
    PlaceAtCursor,
    /// Copy a share link for the current state to the clipboard.
    Share,
    Quit,
}

/// Map keyboard input to a UI command.
pub fn map_key(key: KeyEvent) -> Option<UiCommand> {
    if should_quit(key) {
        return Some(UiCommand::Quit);
    }

    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(UiCommand::Cursor(CursorMove::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(UiCommand::Cursor(CursorMove::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(UiCommand::Cursor(CursorMove::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(UiCommand::Cursor(CursorMove::Right))
        }

        // Placement
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::PlaceAtCursor),
        KeyCode::Char(ch @ '1'..='9') => {
            let idx = (ch as u8 - b'1') as usize;
            Some(UiCommand::Game(GameAction::Place(idx)))
        }

        // Actions
        KeyCode::Char('u') | KeyCode::Char('U') => Some(UiCommand::Game(GameAction::Undo)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UiCommand::Share),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiCommand::Game(GameAction::Restart)),

        _ => None,
    }
}

/// Map a mouse event to a UI command: left-click on a cell places there.
pub fn map_mouse(mouse: MouseEvent, layout: &BoardLayout) -> Option<UiCommand> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    layout
        .cell_at(mouse.column, mouse.row)
        .map(|idx| UiCommand::Game(GameAction::Place(idx)))
}

/// Check if the key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
