//! Read-only view of the inventory for rendering and machine output.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Piece, PieceId, QUEUE_CAPACITY, STACK_CAPACITY};

/// Queue and stack contents in display order.
///
/// `queue` runs front to back, `stack` runs top to base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct InventorySnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: PieceId,
}

impl InventorySnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = PieceId::default();
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn stack_is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether `id` is held by either container
    pub fn contains(&self, id: PieceId) -> bool {
        self.queue.iter().chain(self.stack.iter()).any(|p| p.id == id)
    }
}
