//! Terminal tic-tac-toe runner (default binary).
//!
//! Strictly event-driven: the loop blocks on the next terminal event,
//! applies it to the game state, and redraws. The only startup input is an
//! optional replay link; the only outbound side effect is the clipboard.

use std::env;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{map_key, map_mouse, CursorMove, UiCommand};
use tui_tictactoe::replay;
use tui_tictactoe::term::{GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::{GameAction, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    replay: Option<String>,
    base_url: String,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }
    let options = parse_args(&args)?;

    init_tracing()?;
    info!("starting tui-tictactoe");

    // Read the replay parameter once, before the terminal takes over.
    // Malformed input falls back to a fresh game without comment.
    let state = replay::initial_state(options.replay.as_deref());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state, &options.base_url);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut state: GameState, base_url: &str) -> Result<()> {
    let view = GameView::default();
    let mut cursor = 4; // start on the center cell
    let mut notice: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&state, cursor, notice.as_deref(), viewport);
        term.draw(fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(command) = map_key(key) else {
                    continue;
                };
                notice = None;
                match command {
                    UiCommand::Quit => return Ok(()),
                    UiCommand::Cursor(dir) => cursor = move_cursor(cursor, dir),
                    UiCommand::PlaceAtCursor => apply(&mut state, GameAction::Place(cursor)),
                    UiCommand::Game(action) => apply(&mut state, action),
                    UiCommand::Share => notice = share(&state, base_url),
                }
            }
            Event::Mouse(mouse) => {
                let layout = view.layout(viewport);
                if let Some(UiCommand::Game(action)) = map_mouse(mouse, &layout) {
                    notice = None;
                    if let GameAction::Place(idx) = action {
                        cursor = idx;
                    }
                    apply(&mut state, action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Apply an action. Rejected inputs are silent no-ops, logged at debug.
fn apply(state: &mut GameState, action: GameAction) {
    if !state.apply_action(action) {
        debug!(?action, "action ignored");
    }
}

fn move_cursor(cursor: usize, dir: CursorMove) -> usize {
    let row = cursor / GRID_WIDTH;
    let col = cursor % GRID_WIDTH;
    let (row, col) = match dir {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(GRID_WIDTH - 1), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(GRID_WIDTH - 1)),
    };
    row * GRID_WIDTH + col
}

/// Build the share link and copy it to the system clipboard.
///
/// Failure is logged only; there is no user-visible failure state and the
/// game is never affected.
fn share(state: &GameState, base_url: &str) -> Option<String> {
    let url = replay::share_url(base_url, state);
    match copy_to_clipboard(&url) {
        Ok(()) => {
            info!(%url, "share link copied to clipboard");
            Some(String::from("Share link copied to clipboard"))
        }
        Err(err) => {
            warn!(%err, %url, "clipboard write failed");
            None
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        replay: None,
        base_url: replay::DEFAULT_BASE_URL.to_string(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--replay" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --replay"))?;
                options.replay = Some(value.clone());
            }
            "--base-url" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --base-url"))?;
                options.base_url = value.clone();
            }
            other => return Err(anyhow!("unknown argument: {other} (try --help)")),
        }
        i += 1;
    }

    Ok(options)
}

fn print_usage() {
    println!("tui-tictactoe - terminal tic-tac-toe with undo and shareable replay links");
    println!();
    println!("USAGE:");
    println!("    tui-tictactoe [--replay <url-or-value>] [--base-url <url>]");
    println!();
    println!("OPTIONS:");
    println!("    --replay <url-or-value>   restore a shared game (full link or bare");
    println!("                              replay parameter value)");
    println!("    --base-url <url>          base used when building share links");
    println!("    -h, --help                print this help");
    println!();
    println!("KEYS:");
    println!("    click / 1-9 / arrows+enter   place a mark");
    println!("    u                            undo last move");
    println!("    s                            copy share link to clipboard");
    println!("    r                            new game");
    println!("    q / esc                      quit");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG              log filter (tracing syntax)");
    println!("    TICTACTOE_LOG_PATH    append the log to this file instead of stderr");
}

/// Route tracing output away from the alternate screen when asked to.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match env::var("TICTACTOE_LOG_PATH") {
        Ok(path) if !path.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options.replay, None);
        assert_eq!(options.base_url, replay::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_args_replay_and_base_url() {
        let options =
            parse_args(&args(&["--replay", "https://x.test/?replay=abc", "--base-url", "https://y.test/"]))
                .unwrap();
        assert_eq!(options.replay.as_deref(), Some("https://x.test/?replay=abc"));
        assert_eq!(options.base_url, "https://y.test/");
    }

    #[test]
    fn test_parse_args_rejects_unknown_and_missing() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--replay"])).is_err());
    }

    #[test]
    fn test_move_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(4, CursorMove::Up), 1);
        assert_eq!(move_cursor(1, CursorMove::Up), 1);
        assert_eq!(move_cursor(4, CursorMove::Down), 7);
        assert_eq!(move_cursor(7, CursorMove::Down), 7);
        assert_eq!(move_cursor(3, CursorMove::Left), 3);
        assert_eq!(move_cursor(5, CursorMove::Right), 5);
        assert_eq!(move_cursor(4, CursorMove::Left), 3);
    }
}
