//! Supplier module - piece generation
//!
//! A supplier turns the next sequence id into a piece. It never owns the id
//! counter; [`IdSequence`] does, and the inventory passes ids in.
//!
//! [`RandomSupplier`] draws shapes uniformly from [`Shape::ALL`].
//! [`CycleSupplier`] walks a fixed shape list for deterministic tests.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Piece, PieceId, Shape};

/// Source of new pieces for the queue
pub trait PieceSupplier {
    /// Build the piece that will carry `id`
    fn generate(&mut self, id: PieceId) -> Piece;
}

impl<S: PieceSupplier + ?Sized> PieceSupplier for &mut S {
    fn generate(&mut self, id: PieceId) -> Piece {
        (**self).generate(id)
    }
}

/// Session id counter. Starts at 0 and advances once per generated piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue a sequence whose next id is `next`
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Hand out the current id and advance
    pub fn next_id(&mut self) -> PieceId {
        let id = PieceId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`IdSequence::next_id`] will return
    pub fn peek(&self) -> PieceId {
        PieceId(self.next)
    }
}

/// Uniform random shapes from a seeded [`StdRng`]
#[derive(Debug, Clone)]
pub struct RandomSupplier {
    rng: StdRng,
    seed: u64,
}

impl RandomSupplier {
    /// Create a supplier with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the wall clock
    pub fn from_clock() -> Self {
        Self::seeded(clock_seed())
    }

    /// Seed this supplier started from (for reproducing a session)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PieceSupplier for RandomSupplier {
    fn generate(&mut self, id: PieceId) -> Piece {
        let shape = Shape::ALL[self.rng.random_range(0..Shape::ALL.len())];
        Piece::new(shape, id)
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
///
/// Falls back to 1 on a clock set before 1970.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(1)
}

/// Deterministic supplier cycling through a fixed list of shapes
#[derive(Debug, Clone)]
pub struct CycleSupplier {
    shapes: Vec<Shape>,
    index: usize,
}

impl CycleSupplier {
    /// Cycle through `shapes`. An empty list falls back to [`Shape::ALL`].
    pub fn new(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let mut shapes: Vec<Shape> = shapes.into_iter().collect();
        if shapes.is_empty() {
            shapes = Shape::ALL.to_vec();
        }
        Self { shapes, index: 0 }
    }
}

impl Default for CycleSupplier {
    /// I, O, T, L, I, O, ...
    fn default() -> Self {
        Self::new(Shape::ALL)
    }
}

impl PieceSupplier for CycleSupplier {
    fn generate(&mut self, id: PieceId) -> Piece {
        let shape = self.shapes[self.index];
        self.index = (self.index + 1) % self.shapes.len();
        Piece::new(shape, id)
    }
}
