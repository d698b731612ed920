//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! The drawing API is intentionally small: enter, draw, exit. Every draw is
//! a full redraw; at one frame per input event there is nothing worth
//! diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Frame, Tint};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush a full frame, batching colour changes.
    pub fn draw(&mut self, fb: &Frame) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Tint> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let glyph = fb.get(x, y).unwrap_or_default();
                if current != Some(glyph.tint) {
                    self.buf.queue(SetForegroundColor(colour_for(glyph.tint)))?;
                    current = Some(glyph.tint);
                }
                self.buf.queue(Print(glyph.ch))?;
            }
            if y + 1 < fb.height() {
                self.buf.queue(Print("\r\n"))?;
            }
        }
        self.buf.queue(ResetColor)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn colour_for(tint: Tint) -> Color {
    match tint {
        Tint::Plain => Color::Reset,
        Tint::Grey => Color::DarkGrey,
        Tint::Red => Color::Red,
        Tint::Blue => Color::Blue,
        Tint::Emphasis => Color::White,
    }
}
