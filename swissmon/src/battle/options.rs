use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use swissmon_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
    rand_util,
};

/// How the random factor of the damage calculation is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageRandomization {
    /// Draw the factor uniformly from `[0.85, 1.0)`.
    #[default]
    Randomize,
    /// Always use a factor of 1.0.
    Max,
    /// Always use a factor of 0.85.
    Min,
}

impl DamageRandomization {
    /// Lowest possible random factor.
    pub const MIN_FACTOR: f64 = 0.85;
    /// Highest possible random factor.
    pub const MAX_FACTOR: f64 = 1.0;

    /// Produces the random factor for a single damage roll.
    ///
    /// Only [`Self::Randomize`] advances the PRNG.
    pub fn factor(&self, prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
        match self {
            Self::Randomize => rand_util::uniform(prng, Self::MIN_FACTOR, Self::MAX_FACTOR),
            Self::Max => Self::MAX_FACTOR,
            Self::Min => Self::MIN_FACTOR,
        }
    }
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_max_team_size() -> usize {
    6
}

fn default_wild_level_range() -> (u8, u8) {
    (2, 7)
}

/// Options that change how the battle engine behaves.
///
/// These options are usually shared by every battle in a game.
#[derive(Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Seed for the battle's random number generator.
    ///
    /// Battles started with the same seed and the same actions play out identically.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How the random factor of the damage calculation is chosen.
    #[serde(default)]
    pub randomize_damage: DamageRandomization,

    /// Maximum number of creatures on the player's team.
    #[serde(default = "default_max_team_size")]
    pub max_team_size: usize,

    /// Inclusive range of levels for wild creatures.
    #[serde(default = "default_wild_level_range")]
    pub wild_level_range: (u8, u8),

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests that need fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl BattleEngineOptions {
    /// Creates a new random number generator from the configured seed.
    pub fn create_prng(&self) -> Box<dyn PseudoRandomNumberGenerator> {
        (self.rng_factory)(self.seed)
    }

    /// Rolls a level for a wild creature within [`Self::wild_level_range`].
    pub fn roll_wild_level(&self, prng: &mut dyn PseudoRandomNumberGenerator) -> u8 {
        let (min, max) = self.wild_level_range;
        let (min, max) = (min.min(max), min.max(max));
        rand_util::range(prng, min as u64, max as u64 + 1) as u8
    }
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            randomize_damage: DamageRandomization::default(),
            max_team_size: default_max_team_size(),
            wild_level_range: default_wild_level_range(),
            rng_factory: default_rng_factory(),
        }
    }
}

impl fmt::Debug for BattleEngineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleEngineOptions")
            .field("seed", &self.seed)
            .field("randomize_damage", &self.randomize_damage)
            .field("max_team_size", &self.max_team_size)
            .field("wild_level_range", &self.wild_level_range)
            .finish_non_exhaustive()
    }
}
