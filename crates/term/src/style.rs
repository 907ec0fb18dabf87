//! Colors used by the state frame.

use crate::types::Shape;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal text styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Rgb,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bold: false,
        }
    }
}

/// Style for a piece tag of the given shape.
pub fn shape_style(shape: Shape) -> TextStyle {
    let fg = match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
    };
    TextStyle { fg, bold: true }
}

/// Style for the frame title and rules.
pub fn title_style() -> TextStyle {
    TextStyle {
        fg: Rgb::new(200, 200, 200),
        bold: true,
    }
}
