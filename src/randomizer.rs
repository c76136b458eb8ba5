//! Piece randomizers
//!
//! The engine draws one integer in `[0, TYPE_COUNT)` per spawn. Anything that
//! can produce those draws can drive a game, which keeps replays and tests
//! deterministic.

use crate::tetromino::TYPE_COUNT;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of piece-type draws
pub trait Randomizer {
    /// Draw a uniformly distributed integer in `[0, TYPE_COUNT)`
    fn draw(&mut self) -> usize;
}

/// Uniform randomizer backed by a seeded ChaCha stream
#[derive(Debug, Clone)]
pub struct SeededRandomizer {
    seed: u64,
    rng: ChaCha8Rng,
}

impl Default for SeededRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeededRandomizer {
    /// Create a randomizer with a fresh random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a randomizer that replays the same draws for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this randomizer was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomizer for SeededRandomizer {
    fn draw(&mut self) -> usize {
        self.rng.gen_range(0..TYPE_COUNT)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedRandomizer {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandomizer {
    /// An empty script draws 0 forever
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }
}

impl Randomizer for ScriptedRandomizer {
    fn draw(&mut self) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value % TYPE_COUNT
    }
}
