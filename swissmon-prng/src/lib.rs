pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A pseudo-random number generator that can be deterministically "replayed" from its initial
/// seed.
///
/// Every random decision in a battle (natures, accuracy, damage rolls, enemy move choice, capture
/// trials) draws from a single generator, so a battle started from the same seed with the same
/// player inputs always plays out the same way.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next value in the sequence.
    ///
    /// Values are uniformly distributed in `[0, 2^32)`.
    fn next(&mut self) -> u32;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A real implementation of [`PseudoRandomNumberGenerator`], backed by a 64-bit linear
/// congruential generator.
#[derive(Debug, Clone)]
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// If no seed is given, one is generated from the thread-local RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    fn generate_seed() -> u64 {
        rand::rng().random()
    }

    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u32 {
        self.seed = Self::next_seed(self.seed);
        // The lower bits of an LCG have short periods.
        (self.seed >> 32) as u32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
