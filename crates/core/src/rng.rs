//! RNG module - next-piece randomization
//!
//! [`KindRandomizer`] is the randomness source consumed by the model when it
//! refills the look-ahead slot. Two strategies are provided:
//!
//! - [`UniformRandomizer`]: every draw is uniform over the seven kinds.
//! - [`PoolRandomizer`]: a pool holding seven copies of each kind is shuffled and
//!   drawn until empty, then refilled. Droughts are bounded by the pool size.
//!
//! Both are backed by a PCG generator and are fully deterministic when seeded.
//! [`SequenceRandomizer`] replays a fixed list of kinds for scripted games.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::PieceKind;

/// Copies of each kind in one [`PoolRandomizer`] refill.
pub const POOL_COPIES: usize = 7;

const POOL_SIZE: usize = PieceKind::COUNT * POOL_COPIES;

/// Source of the next piece kind.
pub trait KindRandomizer {
    fn next_kind(&mut self) -> PieceKind;
}

impl<K: KindRandomizer + ?Sized> KindRandomizer for Box<K> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<K: KindRandomizer + ?Sized> KindRandomizer for &mut K {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform draw over all kinds
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    rng: Pcg32,
}

impl UniformRandomizer {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }
}

impl KindRandomizer for UniformRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.random_range(0..PieceKind::COUNT);
        PieceKind::ALL[index]
    }
}

/// Shuffled pool with [`POOL_COPIES`] copies of every kind
#[derive(Debug, Clone)]
pub struct PoolRandomizer {
    pool: ArrayVec<PieceKind, POOL_SIZE>,
    rng: Pcg32,
}

impl PoolRandomizer {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(Pcg32::from_os_rng())
    }

    fn with_rng(rng: Pcg32) -> Self {
        Self {
            pool: ArrayVec::new(),
            rng,
        }
    }

    fn refill(&mut self) {
        self.pool.clear();
        for _ in 0..POOL_COPIES {
            self.pool.extend(PieceKind::ALL);
        }
        self.pool.shuffle(&mut self.rng);
    }

    /// Kinds left before the next refill
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

impl KindRandomizer for PoolRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        if self.pool.is_empty() {
            self.refill();
        }
        // refill() always leaves POOL_SIZE entries
        self.pool.pop().unwrap_or(PieceKind::I)
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandomizer {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl SequenceRandomizer {
    /// An empty sequence yields `I` forever.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            pos: 0,
        }
    }
}

impl KindRandomizer for SequenceRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos += 1;
        kind
    }
}
