//! Upcoming-piece queue - fixed-capacity circular FIFO
//!
//! Storage is a fixed array addressed from a moving front index, so both
//! [`PieceQueue::enqueue`] and [`PieceQueue::dequeue`] are O(1) and never
//! shift elements. Logical offset `k` lives at slot `(front + k) % N`.

use std::iter::FusedIterator;

use crate::error::{Container, InventoryError, Result};
use crate::types::{Piece, QUEUE_CAPACITY};

/// Circular FIFO of pieces with capacity `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue<const N: usize = QUEUE_CAPACITY> {
    slots: [Option<Piece>; N],
    /// Slot holding the front piece
    front: usize,
    len: usize,
}

impl<const N: usize> PieceQueue<N> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Append a piece at the back.
    ///
    /// A full queue hands the piece back inside
    /// [`InventoryError::CapacityExceeded`] and is left unchanged.
    pub fn enqueue(&mut self, piece: Piece) -> Result<()> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded {
                container: Container::Queue,
                piece,
            });
        }

        let back = self.slot(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> Result<Piece> {
        if self.is_empty() {
            return Err(self.underflow());
        }

        let piece = self.slots[self.front].take().ok_or_else(|| self.underflow())?;
        self.front = (self.front + 1) % N;
        self.len -= 1;
        Ok(piece)
    }

    /// The next piece to be played
    pub fn peek_front(&self) -> Result<&Piece> {
        if self.is_empty() {
            return Err(self.underflow());
        }
        self.peek_at(0)
    }

    /// The piece `offset` positions behind the front
    pub fn peek_at(&self, offset: usize) -> Result<&Piece> {
        let slot = self.checked_slot(offset)?;
        self.slots[slot]
            .as_ref()
            .ok_or_else(|| self.out_of_range(offset))
    }

    /// Overwrite the piece at `offset`, returning the piece it replaced.
    pub fn replace_at(&mut self, offset: usize, piece: Piece) -> Result<Piece> {
        let slot = self.checked_slot(offset)?;
        self.slots[slot]
            .replace(piece)
            .ok_or_else(|| self.out_of_range(offset))
    }

    /// Front-to-back traversal. Does not mutate; each call starts at the front.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % N
    }

    fn checked_slot(&self, offset: usize) -> Result<usize> {
        if offset >= self.len {
            return Err(self.out_of_range(offset));
        }
        Ok(self.slot(offset))
    }

    fn underflow(&self) -> InventoryError {
        InventoryError::Underflow {
            container: Container::Queue,
        }
    }

    fn out_of_range(&self, offset: usize) -> InventoryError {
        InventoryError::IndexOutOfRange {
            container: Container::Queue,
            offset,
            len: self.len,
        }
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a PieceQueue<N> {
    type Item = &'a Piece;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`PieceQueue`] from front to back.
#[derive(Debug, Clone)]
pub struct Iter<'a, const N: usize> {
    queue: &'a PieceQueue<N>,
    offset: usize,
}

impl<'a, const N: usize> Iterator for Iter<'a, N> {
    type Item = &'a Piece;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let slot = self.queue.slot(self.offset);
        self.offset += 1;
        self.queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Iter<'_, N> {}

impl<const N: usize> FusedIterator for Iter<'_, N> {}
