use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tetris_stack::core::{Inventory, InventorySnapshot};
use tetris_stack::types::TransferAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn exercise(inv: &mut Inventory, snap: &mut InventorySnapshot) {
    for action in TransferAction::ALL {
        // Failures included: errors are plain values.
        let _ = inv.apply(action);
    }
    let _ = inv.apply(TransferAction::Reserve);
    let _ = inv.apply(TransferAction::Reserve);
    let _ = inv.apply(TransferAction::SwapBlock);
    inv.snapshot_into(snap);
}

#[test]
fn transfers_and_snapshots_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut inv = Inventory::seeded(1);
    let mut snap = InventorySnapshot::default();

    // Warm-up: touches every success and failure path once.
    for _ in 0..4 {
        exercise(&mut inv, &mut snap);
    }

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            exercise(&mut inv, &mut snap);
        }
    });

    assert_eq!(allocs, 0);
}
