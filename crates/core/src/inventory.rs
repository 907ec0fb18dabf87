//! Inventory module - the queue/stack pair and the transfers between them
//!
//! [`Inventory`] owns the upcoming queue, the reserve stack, the supplier and
//! the id counter for one session. The five transfer operations are its only
//! state transitions. Each returns a [`Transfer`] describing the pieces that
//! moved, or an [`InventoryError`] explaining why nothing moved.
//!
//! [`Inventory::new`] fills the queue to capacity and every successful play
//! or reserve refills it, so a session started that way always holds
//! [`QUEUE_CAPACITY`](crate::types::QUEUE_CAPACITY) queued pieces between
//! calls. [`Inventory::from_parts`] resumes from arbitrary containers, where
//! the queue may be short or empty.

use tracing::{debug, info, trace};

use crate::error::{InventoryError, Result};
use crate::queue::PieceQueue;
use crate::snapshot::InventorySnapshot;
use crate::stack::PieceStack;
use crate::supplier::{IdSequence, PieceSupplier, RandomSupplier};
use crate::types::{Piece, PieceId, TransferAction, SWAP_BLOCK_LEN};

/// What a committed transfer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// `piece` left the queue; `refill` joined at the back
    Played { piece: Piece, refill: Piece },
    /// `piece` moved from the queue to the stack top; `refill` joined the queue
    Reserved { piece: Piece, refill: Piece },
    /// `piece` left the stack top
    Used { piece: Piece },
    /// The queue front and stack top traded places
    SwappedFront { to_stack: Piece, to_queue: Piece },
    /// Queue offset `i` and stack offset `i` traded places for each `i`
    SwappedBlock {
        to_stack: [Piece; SWAP_BLOCK_LEN],
        to_queue: [Piece; SWAP_BLOCK_LEN],
    },
}

impl Transfer {
    pub fn action(&self) -> TransferAction {
        match self {
            Transfer::Played { .. } => TransferAction::Play,
            Transfer::Reserved { .. } => TransferAction::Reserve,
            Transfer::Used { .. } => TransferAction::UseReserved,
            Transfer::SwappedFront { .. } => TransferAction::SwapFront,
            Transfer::SwappedBlock { .. } => TransferAction::SwapBlock,
        }
    }
}

/// Queue, stack, supplier and id counter for one session
#[derive(Debug, Clone)]
pub struct Inventory<S = RandomSupplier> {
    queue: PieceQueue,
    stack: PieceStack,
    supplier: S,
    ids: IdSequence,
}

impl Inventory<RandomSupplier> {
    /// Start a session with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSupplier::seeded(seed))
    }

    /// Start a session seeded from the wall clock
    pub fn from_clock() -> Self {
        Self::new(RandomSupplier::from_clock())
    }

    pub fn seed(&self) -> u64 {
        self.supplier.seed()
    }
}

impl<S: PieceSupplier> Inventory<S> {
    /// Empty stack, queue filled with ids `0..QUEUE_CAPACITY`.
    pub fn new(supplier: S) -> Self {
        let mut inventory = Self {
            queue: PieceQueue::new(),
            stack: PieceStack::new(),
            supplier,
            ids: IdSequence::new(),
        };

        while !inventory.queue.is_full() {
            if inventory.refill().is_err() {
                break;
            }
        }

        debug!(queue_len = inventory.queue.len(), "inventory ready");
        inventory
    }

    /// Resume from existing containers without refilling the queue.
    ///
    /// `ids` must be past every id already in `queue` and `stack`.
    pub fn from_parts(queue: PieceQueue, stack: PieceStack, supplier: S, ids: IdSequence) -> Self {
        debug!(
            queue_len = queue.len(),
            stack_len = stack.len(),
            next_id = %ids.peek(),
            "inventory resumed"
        );
        Self {
            queue,
            stack,
            supplier,
            ids,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &PieceStack {
        &self.stack
    }

    pub fn supplier(&self) -> &S {
        &self.supplier
    }

    /// Id the next generated piece will get
    pub fn next_id(&self) -> PieceId {
        self.ids.peek()
    }

    /// Apply one transfer
    pub fn apply(&mut self, action: TransferAction) -> Result<Transfer> {
        match action {
            TransferAction::Play => self.play(),
            TransferAction::Reserve => self.reserve(),
            TransferAction::UseReserved => self.use_reserved(),
            TransferAction::SwapFront => self.swap_front(),
            TransferAction::SwapBlock => self.swap_block(),
        }
    }

    /// Play the queue front, then refill the queue
    pub fn play(&mut self) -> Result<Transfer> {
        let piece = self
            .queue
            .dequeue()
            .map_err(|err| rejected(TransferAction::Play, err))?;
        let refill = self.refill()?;

        debug!(%piece, %refill, "played");
        Ok(Transfer::Played { piece, refill })
    }

    /// Move the queue front onto the stack, then refill the queue.
    ///
    /// With a full stack the front piece is discarded and the queue is still
    /// refilled; the error carries the discarded piece.
    pub fn reserve(&mut self) -> Result<Transfer> {
        let piece = self
            .queue
            .dequeue()
            .map_err(|err| rejected(TransferAction::Reserve, err))?;
        let pushed = self.stack.push(piece);
        let refill = self.refill()?;

        match pushed {
            Ok(()) => {
                debug!(%piece, %refill, stack_len = self.stack.len(), "reserved");
                Ok(Transfer::Reserved { piece, refill })
            }
            Err(err) => Err(rejected(TransferAction::Reserve, err)),
        }
    }

    /// Play the stack top. The queue is untouched.
    pub fn use_reserved(&mut self) -> Result<Transfer> {
        let piece = self
            .stack
            .pop()
            .map_err(|err| rejected(TransferAction::UseReserved, err))?;

        debug!(%piece, stack_len = self.stack.len(), "used reserved piece");
        Ok(Transfer::Used { piece })
    }

    /// Exchange the queue front with the stack top
    pub fn swap_front(&mut self) -> Result<Transfer> {
        let front = *self
            .queue
            .peek_front()
            .map_err(|err| rejected(TransferAction::SwapFront, err))?;
        let top = *self
            .stack
            .peek_top()
            .map_err(|err| rejected(TransferAction::SwapFront, err))?;

        self.queue.replace_at(0, top)?;
        self.stack.replace_at(0, front)?;

        debug!(to_stack = %front, to_queue = %top, "swapped front");
        Ok(Transfer::SwappedFront {
            to_stack: front,
            to_queue: top,
        })
    }

    /// Exchange the first [`SWAP_BLOCK_LEN`] queue pieces with the top
    /// [`SWAP_BLOCK_LEN`] stack pieces, pairing queue offset `i` with stack
    /// offset `i`.
    pub fn swap_block(&mut self) -> Result<Transfer> {
        if self.queue.len() < SWAP_BLOCK_LEN || self.stack.len() < SWAP_BLOCK_LEN {
            return Err(rejected(
                TransferAction::SwapBlock,
                InventoryError::PreconditionFailed {
                    required: SWAP_BLOCK_LEN,
                    queue_len: self.queue.len(),
                    stack_len: self.stack.len(),
                },
            ));
        }

        let mut to_stack = [*self.queue.peek_front()?; SWAP_BLOCK_LEN];
        let mut to_queue = [*self.stack.peek_top()?; SWAP_BLOCK_LEN];

        for offset in 0..SWAP_BLOCK_LEN {
            let from_stack = *self.stack.peek_at(offset)?;
            let from_queue = self.queue.replace_at(offset, from_stack)?;
            self.stack.replace_at(offset, from_queue)?;

            to_stack[offset] = from_queue;
            to_queue[offset] = from_stack;
        }

        debug!(?to_stack, ?to_queue, "swapped block");
        Ok(Transfer::SwappedBlock { to_stack, to_queue })
    }

    /// Copy the visible state into an existing snapshot (no allocation).
    pub fn snapshot_into(&self, out: &mut InventorySnapshot) {
        out.queue.clear();
        out.queue.extend(self.queue.iter().copied());
        out.stack.clear();
        out.stack.extend(self.stack.iter().copied());
        out.next_id = self.ids.peek();
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        let mut s = InventorySnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Generate one piece and append it to the queue
    fn refill(&mut self) -> Result<Piece> {
        let piece = self.supplier.generate(self.ids.next_id());
        self.queue.enqueue(piece)?;

        trace!(%piece, queue_len = self.queue.len(), "refilled queue");
        Ok(piece)
    }
}

fn rejected(action: TransferAction, err: InventoryError) -> InventoryError {
    info!(%action, %err, "transfer rejected");
    err
}
