//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and the mouse
//! handler shares its `BoardLayout` so hit testing and rendering can never
//! disagree about where a cell is.

use crate::core::{rules, Board, GameState};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{GameStatus, Player, CELL_COUNT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const X_COLOR: Rgb = Rgb::new(80, 220, 220);
const O_COLOR: Rgb = Rgb::new(240, 200, 80);
const GRID_COLOR: Rgb = Rgb::new(140, 140, 150);
const TEXT_COLOR: Rgb = Rgb::new(220, 220, 220);
const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const CURSOR_BG: Rgb = Rgb::new(55, 55, 75);
const WIN_BG: Rgb = Rgb::new(25, 70, 35);

/// Where the board frame landed in terminal coordinates.
///
/// `cell_at` is the single source of truth for click-to-cell translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x0: u16,
    pub y0: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Outer frame width, separators included.
    pub fn frame_w(&self) -> u16 {
        GRID_WIDTH as u16 * (self.cell_w + 1) + 1
    }

    /// Outer frame height, separators included.
    pub fn frame_h(&self) -> u16 {
        GRID_WIDTH as u16 * (self.cell_h + 1) + 1
    }

    /// Top-left terminal coordinate of a cell's interior.
    fn cell_origin(&self, idx: usize) -> (u16, u16) {
        let row = (idx / GRID_WIDTH) as u16;
        let col = (idx % GRID_WIDTH) as u16;
        (
            self.x0 + 1 + col * (self.cell_w + 1),
            self.y0 + 1 + row * (self.cell_h + 1),
        )
    }

    /// Map a terminal coordinate to the board cell under it.
    ///
    /// Separator lines and anything outside the frame map to `None`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        if x <= self.x0 || y <= self.y0 {
            return None;
        }
        let dx = x - self.x0 - 1;
        let dy = y - self.y0 - 1;

        let col = (dx / (self.cell_w + 1)) as usize;
        let row = (dy / (self.cell_h + 1)) as usize;
        if col >= GRID_WIDTH || row >= GRID_WIDTH {
            return None;
        }
        // Points on a separator line belong to no cell.
        if dx % (self.cell_w + 1) >= self.cell_w || dy % (self.cell_h + 1) >= self.cell_h {
            return None;
        }
        Board::index(row, col)
    }
}

/// Renders the board, status line, and control hints.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 interiors read as roughly square in typical terminal fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Compute where the board lands for this viewport.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let mut layout = BoardLayout {
            x0: 0,
            y0: 0,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        // Status line and a blank row above the frame, hints and notice
        // below it.
        let block_h = layout.frame_h() + 4;
        layout.x0 = viewport.width.saturating_sub(layout.frame_w()) / 2;
        layout.y0 = viewport.height.saturating_sub(block_h) / 2 + 2;
        layout
    }

    /// Render the current game state into a framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        cursor: usize,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        let status = state.status();
        let winning = rules::winning_line(state.board());

        self.draw_status(&mut fb, &layout, viewport, status);
        self.draw_grid(&mut fb, &layout);
        for idx in 0..CELL_COUNT {
            self.draw_cell(&mut fb, &layout, state, idx, cursor, winning, status);
        }
        self.draw_hints(&mut fb, &layout, viewport, state.can_undo());
        if let Some(notice) = notice {
            self.draw_notice(&mut fb, &layout, viewport, notice);
        }

        fb
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        viewport: Viewport,
        status: GameStatus,
    ) {
        let text = status.message();
        let style = match status {
            GameStatus::Won(player) => Style::new(player_color(player), BOARD_BG).bold(),
            GameStatus::InProgress(_) => Style::new(TEXT_COLOR, BOARD_BG),
        };
        let x = viewport.width.saturating_sub(text.chars().count() as u16) / 2;
        fb.put_str(x, layout.y0.saturating_sub(2), &text, style);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = Style::new(GRID_COLOR, BOARD_BG);
        let (x0, y0) = (layout.x0, layout.y0);
        let (w, h) = (layout.frame_w(), layout.frame_h());
        let stride_x = layout.cell_w + 1;
        let stride_y = layout.cell_h + 1;

        for dy in 0..h {
            for dx in 0..w {
                let on_v = dx % stride_x == 0;
                let on_h = dy % stride_y == 0;
                let ch = match (on_v, on_h) {
                    (true, true) => junction(dx, dy, w, h),
                    (true, false) => '│',
                    (false, true) => '─',
                    (false, false) => continue,
                };
                fb.put_char(x0 + dx, y0 + dy, ch, style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        state: &GameState,
        idx: usize,
        cursor: usize,
        winning: Option<(Player, [usize; 3])>,
        status: GameStatus,
    ) {
        let (cx, cy) = layout.cell_origin(idx);
        let on_winning_line = winning.is_some_and(|(_, line)| line.contains(&idx));
        let in_progress = matches!(status, GameStatus::InProgress(_));

        let bg = if on_winning_line {
            WIN_BG
        } else if idx == cursor && in_progress {
            CURSOR_BG
        } else {
            BOARD_BG
        };

        fb.fill_rect(cx, cy, layout.cell_w, layout.cell_h, ' ', Style::new(TEXT_COLOR, bg));

        let mid_x = cx + layout.cell_w / 2;
        let mid_y = cy + layout.cell_h / 2;
        match state.board().get(idx).flatten() {
            Some(player) => {
                let style = Style::new(player_color(player), bg).bold();
                fb.put_char(mid_x, mid_y, player.as_char(), style);
            }
            None => {
                // Faint position digit (1-9, row-major) as a placement aid.
                if in_progress {
                    let digit = char::from(b'1' + idx as u8);
                    fb.put_char(mid_x, mid_y, digit, Style::new(GRID_COLOR, bg).dim());
                }
            }
        }
    }

    fn draw_hints(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        viewport: Viewport,
        can_undo: bool,
    ) {
        let y = layout.y0 + layout.frame_h() + 1;
        let hint = Style::new(GRID_COLOR, BOARD_BG);
        let disabled = hint.dim();

        let undo = "[u] undo";
        let rest = "  [s] share  [r] new game  [q] quit";
        let total = (undo.len() + rest.len()) as u16;
        let x = viewport.width.saturating_sub(total) / 2;

        fb.put_str(x, y, undo, if can_undo { hint } else { disabled });
        fb.put_str(x + undo.len() as u16, y, rest, hint);
    }

    fn draw_notice(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        viewport: Viewport,
        notice: &str,
    ) {
        let y = layout.y0 + layout.frame_h() + 2;
        let x = viewport.width.saturating_sub(notice.chars().count() as u16) / 2;
        fb.put_str(x, y, notice, Style::new(TEXT_COLOR, BOARD_BG).dim());
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

/// Box-drawing junction character for a grid crossing at (dx, dy).
fn junction(dx: u16, dy: u16, w: u16, h: u16) -> char {
    let left = dx == 0;
    let right = dx == w - 1;
    let top = dy == 0;
    let bottom = dy == h - 1;
    match (left, right, top, bottom) {
        (true, _, true, _) => '┌',
        (_, true, true, _) => '┐',
        (true, _, _, true) => '└',
        (_, true, _, true) => '┘',
        (true, _, _, _) => '├',
        (_, true, _, _) => '┤',
        (_, _, true, _) => '┬',
        (_, _, _, true) => '┴',
        _ => '┼',
    }
}
