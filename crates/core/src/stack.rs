//! Reserve stack - fixed-capacity LIFO
//!
//! Offsets count down from the top: offset 0 is the most recently reserved
//! piece, offset `len - 1` is the base.

use arrayvec::ArrayVec;

use crate::error::{Container, InventoryError, Result};
use crate::types::{Piece, STACK_CAPACITY};

/// Bounded LIFO of pieces with capacity `M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceStack<const M: usize = STACK_CAPACITY> {
    /// Base at index 0, top at the end
    items: ArrayVec<Piece, M>,
}

impl<const M: usize> PieceStack<M> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        M
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Put a piece on top. A full stack hands it back unchanged.
    pub fn push(&mut self, piece: Piece) -> Result<()> {
        self.items
            .try_push(piece)
            .map_err(|err| InventoryError::CapacityExceeded {
                container: Container::Stack,
                piece: err.element(),
            })
    }

    /// Remove and return the top piece
    pub fn pop(&mut self) -> Result<Piece> {
        self.items.pop().ok_or(InventoryError::Underflow {
            container: Container::Stack,
        })
    }

    pub fn peek_top(&self) -> Result<&Piece> {
        self.items.last().ok_or(InventoryError::Underflow {
            container: Container::Stack,
        })
    }

    /// The piece `offset` positions below the top
    pub fn peek_at(&self, offset: usize) -> Result<&Piece> {
        let index = self.index_of(offset)?;
        Ok(&self.items[index])
    }

    /// Overwrite the piece at `offset`, returning the piece it replaced.
    pub fn replace_at(&mut self, offset: usize, piece: Piece) -> Result<Piece> {
        let index = self.index_of(offset)?;
        Ok(std::mem::replace(&mut self.items[index], piece))
    }

    /// Top-to-base traversal
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, Piece>> {
        self.items.iter().rev()
    }

    fn index_of(&self, offset: usize) -> Result<usize> {
        let len = self.items.len();
        if offset >= len {
            return Err(InventoryError::IndexOutOfRange {
                container: Container::Stack,
                offset,
                len,
            });
        }
        Ok(len - 1 - offset)
    }
}

impl<const M: usize> Default for PieceStack<M> {
    fn default() -> Self {
        Self::new()
    }
}
