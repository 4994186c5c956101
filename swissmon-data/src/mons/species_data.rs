use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    LearnSet,
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all creatures of a given species. Data about a specific creature
/// (such as its nature, level, or current HP) does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The display name of the species.
    pub name: String,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Capture-rate coefficient, between 0.0 and 1.0.
    pub catch_rate: f64,
    /// Experience awarded for defeating this species.
    pub base_exp_yield: u32,
    /// Moves learned by level.
    #[serde(default)]
    pub learnset: LearnSet,
}

impl SpeciesData {
    /// The species' types, primary type first.
    pub fn types(&self) -> Vec<Type> {
        [Some(self.primary_type), self.secondary_type]
            .into_iter()
            .flatten()
            .collect()
    }
}
