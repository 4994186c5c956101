use std::fmt;

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use swissmon_data::Id;

use crate::{
    capture::CaptureModifiers,
    mons::ExperienceGain,
};

/// The side of a battle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Side {
    #[string = "player"]
    Player,
    #[string = "opponent"]
    Opponent,
}

impl Side {
    /// The side being attacked when this side attacks.
    pub fn foe(&self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// The terminal result of a battle, reported to the world.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum BattleResult {
    #[string = "won"]
    Won,
    #[string = "lost"]
    Lost,
    #[string = "fled"]
    Fled,
    #[string = "captured"]
    Captured,
}

/// How effective a landed move was, grouped for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectivenessTier {
    Immune,
    NotVery,
    Normal,
    Super,
}

impl EffectivenessTier {
    /// Groups a combined multiplier, which may be a product such as 0.25 or 4.0.
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier == 0.0 {
            Self::Immune
        } else if multiplier < 1.0 {
            Self::NotVery
        } else if multiplier > 1.0 {
            Self::Super
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for EffectivenessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immune => write!(f, "immune"),
            Self::NotVery => write!(f, "resisted"),
            Self::Normal => write!(f, "normal"),
            Self::Super => write!(f, "super"),
        }
    }
}

/// The result of a single attack by either side.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub attacker: Side,
    /// Display name of the attacking creature.
    pub attacker_name: String,
    /// The move used, or [`None`] for the flat fallback strike.
    pub move_id: Option<Id>,
    pub move_name: Option<String>,
    pub hit: bool,
    /// Combined type multiplier. Always 1.0 for a miss or the fallback strike.
    pub multiplier: f64,
    pub effectiveness: EffectivenessTier,
    pub damage: u32,
    pub target_fainted: bool,
}

/// A healing item used on the active creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealOutcome {
    pub item: Id,
    pub target_name: String,
    pub healed: u16,
}

/// A capture attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    pub item: Id,
    pub target_name: String,
    pub modifiers: CaptureModifiers,
    pub success: bool,
}

/// Experience awarded to the player's active creature after the opponent fainted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceOutcome {
    pub creature_name: String,
    pub amount: u32,
    pub gain: ExperienceGain,
}

/// Everything that happened during one step of the battle.
///
/// Fields that do not apply to the step are left empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Attacks in the order they happened.
    pub attacks: Vec<AttackOutcome>,
    pub heal: Option<HealOutcome>,
    pub capture: Option<CaptureOutcome>,
    pub experience: Option<ExperienceOutcome>,
    /// A move learning decision the caller must now make.
    pub pending_move: Option<Id>,
    /// Display name of the trainer's next creature, if one was sent out.
    pub next_opponent: Option<String>,
    /// Currency paid out by a defeated trainer.
    pub reward: Option<u32>,
    /// Set when this step ended the battle.
    pub result: Option<BattleResult>,
}

impl TurnOutcome {
    pub fn leveled_up(&self) -> bool {
        self.experience
            .as_ref()
            .is_some_and(|experience| experience.gain.leveled_up())
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}
