//! Integration tests for the transfer operations

use tetris_stack::core::{Container, CycleSupplier, Inventory, InventoryError, Transfer};
use tetris_stack::types::{
    Piece, PieceId, Shape, TransferAction, QUEUE_CAPACITY, STACK_CAPACITY, SWAP_BLOCK_LEN,
};

fn p(shape: Shape, id: u64) -> Piece {
    Piece::new(shape, PieceId(id))
}

fn cycle_inventory() -> Inventory<CycleSupplier> {
    Inventory::new(CycleSupplier::default())
}

fn queue_of(inv: &Inventory<CycleSupplier>) -> Vec<Piece> {
    inv.queue().iter().copied().collect()
}

fn stack_of(inv: &Inventory<CycleSupplier>) -> Vec<Piece> {
    inv.stack().iter().copied().collect()
}

#[test]
fn test_initial_queue_is_full_with_first_ids() {
    let inv = cycle_inventory();
    assert_eq!(
        queue_of(&inv),
        vec![
            p(Shape::I, 0),
            p(Shape::O, 1),
            p(Shape::T, 2),
            p(Shape::L, 3),
            p(Shape::I, 4)
        ]
    );
    assert!(inv.stack().is_empty());
}

#[test]
fn test_reserve_scenario_moves_front_and_refills() {
    let mut inv = cycle_inventory();

    let transfer = inv.apply(TransferAction::Reserve).unwrap();
    assert_eq!(
        transfer,
        Transfer::Reserved {
            piece: p(Shape::I, 0),
            refill: p(Shape::O, 5),
        }
    );

    assert_eq!(stack_of(&inv), vec![p(Shape::I, 0)]);
    assert_eq!(
        queue_of(&inv),
        vec![
            p(Shape::O, 1),
            p(Shape::T, 2),
            p(Shape::L, 3),
            p(Shape::I, 4),
            p(Shape::O, 5)
        ]
    );
}

#[test]
fn test_reserve_with_full_stack_still_refills() {
    let mut inv = cycle_inventory();
    for _ in 0..STACK_CAPACITY {
        inv.apply(TransferAction::Reserve).unwrap();
    }
    let stack_before = stack_of(&inv);
    let front = *inv.queue().peek_front().unwrap();
    let next_id = inv.next_id();

    let err = inv.apply(TransferAction::Reserve).unwrap_err();
    assert_eq!(
        err,
        InventoryError::CapacityExceeded {
            container: Container::Stack,
            piece: front,
        }
    );

    assert_eq!(stack_of(&inv), stack_before);
    assert_eq!(inv.queue().len(), QUEUE_CAPACITY);
    assert_eq!(inv.queue().peek_at(QUEUE_CAPACITY - 1).unwrap().id, next_id);
    // The discarded piece is gone from both containers.
    assert!(!inv.snapshot().contains(front.id));
}

#[test]
fn test_use_reserved_on_empty_stack_changes_nothing() {
    let mut inv = cycle_inventory();
    let queue_before = queue_of(&inv);

    let err = inv.apply(TransferAction::UseReserved).unwrap_err();
    assert_eq!(
        err,
        InventoryError::Underflow {
            container: Container::Stack
        }
    );
    assert_eq!(inv.stack().len(), 0);
    assert_eq!(queue_of(&inv), queue_before);
}

#[test]
fn test_play_keeps_queue_at_capacity() {
    let mut inv = cycle_inventory();
    for round in 0..20u64 {
        match inv.apply(TransferAction::Play).unwrap() {
            Transfer::Played { piece, refill } => {
                assert_eq!(piece.id, PieceId(round));
                assert_eq!(refill.id, PieceId(round + QUEUE_CAPACITY as u64));
            }
            other => panic!("unexpected transfer {:?}", other),
        }
        assert_eq!(inv.queue().len(), QUEUE_CAPACITY);
    }
}

#[test]
fn test_swap_front_then_use_plays_former_front() {
    let mut inv = cycle_inventory();
    inv.apply(TransferAction::Reserve).unwrap();
    inv.apply(TransferAction::SwapFront).unwrap();

    // Stack now holds the piece that was at the queue front (id 1).
    let used = inv.apply(TransferAction::UseReserved).unwrap();
    assert_eq!(
        used,
        Transfer::Used {
            piece: p(Shape::O, 1)
        }
    );
    assert_eq!(inv.queue().peek_front().unwrap().id, PieceId(0));
}

#[test]
fn test_swap_front_with_empty_stack_is_rejected() {
    let mut inv = cycle_inventory();
    let before = inv.snapshot();

    assert_eq!(
        inv.apply(TransferAction::SwapFront),
        Err(InventoryError::Underflow {
            container: Container::Stack
        })
    );
    assert_eq!(inv.snapshot(), before);
}

#[test]
fn test_swap_block_exchanges_positionally() {
    let mut inv = cycle_inventory();
    for _ in 0..SWAP_BLOCK_LEN {
        inv.apply(TransferAction::Reserve).unwrap();
    }
    let queue_before = queue_of(&inv);
    let stack_before = stack_of(&inv);

    inv.apply(TransferAction::SwapBlock).unwrap();

    let queue_after = queue_of(&inv);
    let stack_after = stack_of(&inv);
    for i in 0..SWAP_BLOCK_LEN {
        assert_eq!(queue_after[i], stack_before[i]);
        assert_eq!(stack_after[i], queue_before[i]);
    }
    assert_eq!(queue_after[SWAP_BLOCK_LEN..], queue_before[SWAP_BLOCK_LEN..]);
}

#[test]
fn test_swap_block_twice_restores_arrangement() {
    let mut inv = cycle_inventory();
    for _ in 0..SWAP_BLOCK_LEN {
        inv.apply(TransferAction::Reserve).unwrap();
    }
    assert_eq!(inv.stack().len(), SWAP_BLOCK_LEN);
    let before = inv.snapshot();

    inv.apply(TransferAction::SwapBlock).unwrap();
    assert_ne!(inv.snapshot(), before);
    inv.apply(TransferAction::SwapBlock).unwrap();
    assert_eq!(inv.snapshot(), before);
}

#[test]
fn test_swap_block_with_short_stack_is_rejected() {
    let mut inv = cycle_inventory();
    inv.apply(TransferAction::Reserve).unwrap();
    let before = inv.snapshot();

    let err = inv.apply(TransferAction::SwapBlock).unwrap_err();
    assert!(matches!(
        err,
        InventoryError::PreconditionFailed { stack_len: 1, .. }
    ));
    assert_eq!(inv.snapshot(), before);
}

#[test]
fn test_seeded_inventory_is_reproducible() {
    let mut a = Inventory::seeded(2024);
    let mut b = Inventory::seeded(2024);
    for action in TransferAction::ALL.iter().cycle().take(40) {
        assert_eq!(a.apply(*action), b.apply(*action));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
