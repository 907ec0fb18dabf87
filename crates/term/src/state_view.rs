//! StateView: maps an `InventorySnapshot` into the text frame shown before
//! each menu prompt.
//!
//! This module is pure (writes into a byte buffer, no terminal I/O), so the
//! exact layout can be unit-tested with color disabled.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::InventorySnapshot;
use crate::style::{shape_style, title_style, Rgb, TextStyle};
use crate::types::Piece;

const RULE: &str = "=============================================";
const TITLE: &str = "                 TETRIS STACK                ";
const EMPTY_TAG: &str = "[empty]";

/// Renders the queue and the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateView {
    color: bool,
}

impl StateView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Append the state frame to `out`.
    ///
    /// Queue pieces are listed front to back, stack pieces top to base.
    pub fn render_into(&self, snap: &InventorySnapshot, out: &mut Vec<u8>) -> Result<()> {
        self.styled(out, RULE, title_style())?;
        out.push(b'\n');
        self.styled(out, TITLE, title_style())?;
        out.push(b'\n');
        self.styled(out, RULE, title_style())?;
        out.push(b'\n');

        out.write_all(b"Upcoming queue:\t")?;
        self.pieces(out, &snap.queue)?;
        out.push(b'\n');

        out.write_all(b"Reserve stack (top -> base): ")?;
        self.pieces(out, &snap.stack)?;
        out.push(b'\n');

        self.styled(out, RULE, title_style())?;
        out.push(b'\n');
        Ok(())
    }

    /// Render to an owned string.
    pub fn render(&self, snap: &InventorySnapshot) -> Result<String> {
        let mut out = Vec::with_capacity(512);
        self.render_into(snap, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn pieces(&self, out: &mut Vec<u8>, pieces: &[Piece]) -> Result<()> {
        if pieces.is_empty() {
            out.write_all(EMPTY_TAG.as_bytes())?;
            return Ok(());
        }

        for piece in pieces {
            self.styled(out, &piece.to_string(), shape_style(piece.shape))?;
            out.push(b' ');
        }
        Ok(())
    }

    fn styled(&self, out: &mut Vec<u8>, text: &str, style: TextStyle) -> Result<()> {
        if !self.color {
            out.write_all(text.as_bytes())?;
            return Ok(());
        }

        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        out.queue(Print(text))?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
        Ok(())
    }
}

pub(crate) fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceId, Shape};

    fn snapshot() -> InventorySnapshot {
        let mut snap = InventorySnapshot::default();
        snap.queue.push(Piece::new(Shape::O, PieceId(1)));
        snap.queue.push(Piece::new(Shape::T, PieceId(2)));
        snap.stack.push(Piece::new(Shape::I, PieceId(0)));
        snap
    }

    #[test]
    fn plain_frame_layout() {
        let text = StateView::new(false).render(&snapshot()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1].trim(), "TETRIS STACK");
        assert_eq!(lines[3], "Upcoming queue:\t[O 1] [T 2] ");
        assert_eq!(lines[4], "Reserve stack (top -> base): [I 0] ");
        assert_eq!(lines[5], RULE);
    }

    #[test]
    fn empty_containers_show_marker() {
        let text = StateView::new(false)
            .render(&InventorySnapshot::default())
            .unwrap();
        assert!(text.contains("Upcoming queue:\t[empty]\n"));
        assert!(text.contains("Reserve stack (top -> base): [empty]\n"));
    }

    #[test]
    fn color_frame_wraps_tags_in_escape_codes() {
        let text = StateView::new(true).render(&snapshot()).unwrap();
        assert!(text.contains("[O 1]"));
        assert!(text.contains('\u{1b}'));
        assert!(text.len() > StateView::new(false).render(&snapshot()).unwrap().len());
    }
}
