use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::Id;

/// A species learnset, which maps levels to the moves learned upon reaching them.
///
/// Several moves may share a level. Levels are always visited in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearnSet(BTreeMap<u8, Vec<Id>>);

impl LearnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a move learned at the given level.
    pub fn insert(&mut self, level: u8, id: Id) {
        self.0.entry(level).or_default().push(id);
    }

    /// Moves learned at exactly the given level.
    pub fn at_level(&self, level: u8) -> &[Id] {
        self.0.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Moves learned at or below the given level, in ascending level order.
    pub fn up_to_level(&self, level: u8) -> impl Iterator<Item = (u8, &Id)> + '_ {
        self.0
            .range(..=level)
            .flat_map(|(level, moves)| moves.iter().map(|id| (*level, id)))
    }

    /// Every move in the learnset, in ascending level order.
    pub fn moves(&self) -> impl Iterator<Item = &Id> + '_ {
        self.0.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u8, Id)> for LearnSet {
    fn from_iter<T: IntoIterator<Item = (u8, Id)>>(iter: T) -> Self {
        let mut learnset = Self::new();
        for (level, id) in iter {
            learnset.insert(level, id);
        }
        learnset
    }
}
