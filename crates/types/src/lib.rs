//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond parsing and formatting,
//! making them usable in any context (container logic, rendering, input).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces, kept full between operations |
//! | `STACK_CAPACITY` | 3 | Reserved pieces |
//! | `SWAP_BLOCK_LEN` | 3 | Pieces exchanged by a block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceId, Shape, TransferAction};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//!
//! let piece = Piece::new(Shape::I, PieceId(4));
//! assert_eq!(piece.to_string(), "[I 4]");
//!
//! assert_eq!(TransferAction::from_str("swapFront"), Some(TransferAction::SwapFront));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of upcoming pieces held by the queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by [`TransferAction::SwapBlock`].
pub const SWAP_BLOCK_LEN: usize = 3;

/// The four piece shapes handed out by the supplier
///
/// Each shape has a distinct display color:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Magenta
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    L,
}

impl Shape {
    /// Every shape, in draw order.
    pub const ALL: [Shape; 4] = [Shape::I, Shape::O, Shape::T, Shape::L];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("L"), Some(Shape::L));
    /// assert_eq!(Shape::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "l" => Some(Shape::L),
            _ => None,
        }
    }

    /// Single uppercase letter used in the state frame.
    pub fn as_char(&self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::L => 'L',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Session-unique sequence number of a generated piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u64);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece in the supply: its shape plus the id it was generated with.
///
/// Pieces are never mutated. Ids are never reused within a session, so the
/// id alone identifies a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub shape: Shape,
    pub id: PieceId,
}

impl Piece {
    pub const fn new(shape: Shape, id: PieceId) -> Self {
        Self { shape, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.shape, self.id)
    }
}

/// Transfers that can be applied to the piece inventory
///
/// These are the only transitions of the queue/stack state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferAction {
    /// Take the front of the queue and play it
    Play,
    /// Move the front of the queue onto the reserve stack
    Reserve,
    /// Take the top of the reserve stack and play it
    UseReserved,
    /// Exchange the queue front with the stack top
    SwapFront,
    /// Exchange the three front queue pieces with the three top stack pieces
    SwapBlock,
}

impl TransferAction {
    /// Every action, in menu order.
    pub const ALL: [TransferAction; 5] = [
        TransferAction::Play,
        TransferAction::Reserve,
        TransferAction::UseReserved,
        TransferAction::SwapFront,
        TransferAction::SwapBlock,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::TransferAction;
    ///
    /// assert_eq!(TransferAction::from_str("play"), Some(TransferAction::Play));
    /// assert_eq!(TransferAction::from_str("useReserved"), Some(TransferAction::UseReserved));
    /// assert_eq!(TransferAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(TransferAction::Play),
            "reserve" => Some(TransferAction::Reserve),
            "usereserved" => Some(TransferAction::UseReserved),
            "swapfront" => Some(TransferAction::SwapFront),
            "swapblock" => Some(TransferAction::SwapBlock),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferAction::Play => "play",
            TransferAction::Reserve => "reserve",
            TransferAction::UseReserved => "useReserved",
            TransferAction::SwapFront => "swapFront",
            TransferAction::SwapBlock => "swapBlock",
        }
    }
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
