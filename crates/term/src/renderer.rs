//! ConsoleRenderer: writes frames, menus and messages to stdout.
//!
//! Everything is assembled in a reused byte buffer and flushed in one write
//! per call, the same way for colored and plain output.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::InventorySnapshot;
use crate::messages::render_menu_into;
use crate::state_view::{rgb_to_color, StateView};
use crate::style::Rgb;

/// Tone of a message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
}

impl Tone {
    fn color(self) -> Option<Rgb> {
        match self {
            Tone::Info => None,
            Tone::Success => Some(Rgb::new(100, 220, 120)),
            Tone::Failure => Some(Rgb::new(220, 80, 80)),
        }
    }
}

pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    view: StateView,
    buf: Vec<u8>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            view: StateView::new(color),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn draw_state(&mut self, snap: &InventorySnapshot) -> Result<()> {
        self.buf.clear();
        self.view.render_into(snap, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn draw_menu(&mut self) -> Result<()> {
        self.buf.clear();
        render_menu_into(&mut self.buf)?;
        self.flush_buf()
    }

    /// Print a message preceded by a blank line.
    pub fn message(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.push(b'\n');
        match tone.color().filter(|_| self.view.color()) {
            Some(rgb) => {
                self.buf.queue(SetForegroundColor(rgb_to_color(rgb)))?;
                self.buf.queue(Print(text))?;
                self.buf.queue(ResetColor)?;
            }
            None => self.buf.write_all(text.as_bytes())?,
        }
        self.buf.push(b'\n');
        self.flush_buf()
    }

    /// Print one raw line (used for machine-readable output).
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
