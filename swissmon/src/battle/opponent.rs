use anyhow::Result;
use swissmon_data::{
    Id,
    TrainerData,
};
use swissmon_prng::PseudoRandomNumberGenerator;

use crate::{
    dex::Dex,
    error::general_error,
    mons::Creature,
};

/// The other side of a battle.
///
/// Wild battles have exactly one creature. Trainer battles send out the trainer's team one creature
/// at a time, creating each creature when it is sent out.
#[derive(Debug, Clone)]
pub enum Opponent {
    Wild {
        creature: Creature,
    },
    Trainer {
        id: Id,
        data: TrainerData,
        creature: Creature,
        /// Index of the active creature in the trainer's team.
        index: usize,
    },
}

impl Opponent {
    pub fn wild(creature: Creature) -> Self {
        Self::Wild { creature }
    }

    /// Creates a trainer opponent, sending out the first creature of their team.
    pub fn trainer(
        dex: &Dex,
        id: Id,
        data: TrainerData,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Self> {
        let creature = Self::create_team_member(dex, &data, 0, prng)?
            .ok_or_else(|| general_error(format!("trainer {id} has no creatures")))?;
        Ok(Self::Trainer {
            id,
            data,
            creature,
            index: 0,
        })
    }

    fn create_team_member(
        dex: &Dex,
        data: &TrainerData,
        index: usize,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Option<Creature>> {
        match data.team.get(index) {
            Some(member) => Creature::new(dex, &member.species, member.level, None, prng).map(Some),
            None => Ok(None),
        }
    }

    pub fn active_creature(&self) -> &Creature {
        match self {
            Self::Wild { creature } => creature,
            Self::Trainer { creature, .. } => creature,
        }
    }

    pub fn active_creature_mut(&mut self) -> &mut Creature {
        match self {
            Self::Wild { creature } => creature,
            Self::Trainer { creature, .. } => creature,
        }
    }

    /// Sends out the next creature after the active one was defeated.
    ///
    /// Returns `false` if there is no creature left, in which case the opponent is defeated.
    pub fn advance_after_defeat(
        &mut self,
        dex: &Dex,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<bool> {
        match self {
            Self::Wild { .. } => Ok(false),
            Self::Trainer {
                data,
                creature,
                index,
                ..
            } => match Self::create_team_member(dex, data, *index + 1, prng)? {
                Some(next) => {
                    *creature = next;
                    *index += 1;
                    Ok(true)
                }
                None => Ok(false),
            },
        }
    }

    pub fn can_flee(&self) -> bool {
        matches!(self, Self::Wild { .. })
    }

    pub fn can_capture(&self) -> bool {
        matches!(self, Self::Wild { .. })
    }

    /// The trainer's ID, for trainer battles.
    pub fn trainer_id(&self) -> Option<&Id> {
        match self {
            Self::Wild { .. } => None,
            Self::Trainer { id, .. } => Some(id),
        }
    }

    /// Display name of whoever the player is fighting.
    pub fn name(&self) -> &str {
        match self {
            Self::Wild { creature } => creature.name(),
            Self::Trainer { data, .. } => &data.name,
        }
    }

    /// Currency paid out when the opponent is defeated.
    pub fn reward(&self) -> u32 {
        match self {
            Self::Wild { .. } => 0,
            Self::Trainer { data, .. } => data.reward,
        }
    }

    /// Number of creatures not yet sent out.
    pub fn remaining(&self) -> usize {
        match self {
            Self::Wild { .. } => 0,
            Self::Trainer { data, index, .. } => data.team.len().saturating_sub(*index + 1),
        }
    }
}
