//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Raw mode, alternate screen, hidden cursor, and mouse capture for the
//! whole session; `exit` restores everything even when the event loop
//! errors. Each draw diffs against the previous frame and rewrites only
//! runs of changed glyphs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, keeping it as the diff baseline for the next one.
    pub fn draw(&mut self, fb: FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<Style> = None;
        for y in 0..fb.height() {
            let mut x = 0;
            while x < fb.width() {
                let run = self.run_length(&fb, x, y, full);
                if run == 0 {
                    x += 1;
                    continue;
                }

                self.stdout.queue(cursor::MoveTo(x, y))?;
                for dx in 0..run {
                    let glyph = fb.get(x + dx, y).unwrap_or_default();
                    if style != Some(glyph.style) {
                        self.apply_style(glyph.style)?;
                        style = Some(glyph.style);
                    }
                    self.stdout.queue(Print(glyph.ch))?;
                }
                x += run;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last = Some(fb);
        Ok(())
    }

    /// Length of the changed run starting at (x, y); 0 when unchanged.
    fn run_length(&self, next: &FrameBuffer, x: u16, y: u16, full: bool) -> u16 {
        let changed = |cx: u16| -> bool {
            if full {
                return true;
            }
            match &self.last {
                Some(prev) => prev.get(cx, y) != next.get(cx, y),
                None => true,
            }
        };

        if !changed(x) {
            return 0;
        }
        let mut len = 1;
        while x + len < next.width() && changed(x + len) {
            len += 1;
        }
        len
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::fb::Glyph;

    // Terminal I/O itself is not unit-testable; exercise the diff logic.
    #[test]
    fn test_run_length_coalesces_adjacent_changes() {
        let style = Style::default();
        let mut renderer = TerminalRenderer::new();
        renderer.last = Some(FrameBuffer::new(5, 1));

        let mut next = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            next.put_char(x, 0, 'X', style);
        }

        assert_eq!(renderer.run_length(&next, 0, 0, false), 0);
        assert_eq!(renderer.run_length(&next, 1, 0, false), 3);
        assert_eq!(renderer.run_length(&next, 4, 0, false), 0);
    }

    #[test]
    fn test_run_length_full_redraw_spans_row() {
        let renderer = TerminalRenderer::new();
        let next = FrameBuffer::new(4, 1);
        assert_eq!(renderer.run_length(&next, 0, 0, true), 4);
    }

    #[test]
    fn test_style_reset_attributes() {
        // Bold and dim are independent flags on top of the color pair.
        let glyph = Glyph::default();
        assert!(!glyph.style.bold);
        assert!(!glyph.style.dim);
        assert_eq!(
            rgb_to_color(glyph.style.fg),
            Color::Rgb {
                r: 220,
                g: 220,
                b: 220
            }
        );
    }
}
