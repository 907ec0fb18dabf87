//! Error types for inventory operations

use std::fmt;

use thiserror::Error;

use crate::types::Piece;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Which container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Queue,
    Stack,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => f.write_str("queue"),
            Container::Stack => f.write_str("reserve stack"),
        }
    }
}

/// Errors reported by the containers and the transfer operations.
///
/// None of these are fatal: the operation that produced one has left both
/// containers within their capacity bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Insert into a full container. Carries the piece that did not fit.
    #[error("{container} is full, {piece} could not be added")]
    CapacityExceeded { container: Container, piece: Piece },

    /// Removal from an empty container
    #[error("{container} is empty")]
    Underflow { container: Container },

    /// A block swap needs `required` pieces on both sides
    #[error(
        "swap needs at least {required} pieces in each container (queue has {queue_len}, stack has {stack_len})"
    )]
    PreconditionFailed {
        required: usize,
        queue_len: usize,
        stack_len: usize,
    },

    /// Offset past the end of a container
    #[error("offset {offset} is out of range for {container} of length {len}")]
    IndexOutOfRange {
        container: Container,
        offset: usize,
        len: usize,
    },
}

impl InventoryError {
    /// The container the error refers to, if it names exactly one.
    pub fn container(&self) -> Option<Container> {
        match self {
            InventoryError::CapacityExceeded { container, .. }
            | InventoryError::Underflow { container }
            | InventoryError::IndexOutOfRange { container, .. } => Some(*container),
            InventoryError::PreconditionFailed { .. } => None,
        }
    }
}
