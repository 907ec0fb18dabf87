//! Core inventory logic - pure, deterministic, and testable
//!
//! This crate contains the piece supply of the game: a bounded queue of
//! upcoming pieces, a bounded reserve stack, and the transfers between them.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every transfer returns a structured outcome instead of printing
//! - **Portable**: Drivable from the CLI, a test harness, or anything else
//!
//! # Module Structure
//!
//! - [`queue`]: Fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: Fixed-capacity LIFO of reserved pieces
//! - [`supplier`]: Piece generation and the session id counter
//! - [`inventory`]: The session object and its five transfer operations
//! - [`snapshot`]: Read-only view for rendering
//! - [`error`]: Error taxonomy shared by the containers and the transfers
//!
//! # Rules
//!
//! - The queue starts full (ids `0..5`) and is refilled after every play or reserve
//! - Reserving onto a full stack discards the front piece but still refills the queue
//! - Swaps never change either container's length
//! - A failed transfer leaves both containers within capacity
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{CycleSupplier, Inventory};
//! use tetris_stack_types::TransferAction;
//!
//! let mut inventory = Inventory::new(CycleSupplier::default());
//!
//! inventory.apply(TransferAction::Reserve).unwrap();
//! inventory.apply(TransferAction::SwapFront).unwrap();
//!
//! let snap = inventory.snapshot();
//! assert_eq!(snap.queue.len(), 5);
//! assert_eq!(snap.stack.len(), 1);
//! ```

pub mod error;
pub mod inventory;
pub mod queue;
pub mod snapshot;
pub mod stack;
pub mod supplier;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::{Container, InventoryError, Result};
pub use inventory::{Inventory, Transfer};
pub use queue::PieceQueue;
pub use snapshot::InventorySnapshot;
pub use stack::PieceStack;
pub use supplier::{clock_seed, CycleSupplier, IdSequence, PieceSupplier, RandomSupplier};
