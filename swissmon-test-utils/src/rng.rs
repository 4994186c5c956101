use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::HashMap;
use swissmon::battle::Battle;
use swissmon_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over battle RNG.
///
/// Draws are counted from 1. A fake value inserted for a draw replaces what the real generator
/// would have produced for that draw only.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u32>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::default(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u32) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u32)>,
    {
        self.fake_values.extend(iterable);
    }

    /// Inserts fake values for draws counted from the next one, so that `1` is the next draw.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u32)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (offset + count, value)),
        );
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u32 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The raw draw that produces the given value in `[0, 1)` from a unit roll.
pub fn unit_draw(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * 4294967296.0).min(u32::MAX as f64) as u32
}

pub fn get_controlled_rng_for_battle<'b>(
    battle: &'b mut Battle,
) -> Option<&'b mut ControlledRandomNumberGenerator> {
    battle
        .prng_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
