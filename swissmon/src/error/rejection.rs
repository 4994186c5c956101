use anyhow::Error;
use swissmon_data::Id;
use thiserror::Error;

use crate::error::WrapError;

/// A recoverable refusal to perform a requested action.
///
/// Nothing is mutated when an action is rejected. Callers can recover the rejection from an
/// [`Error`] with [`Error::downcast_ref`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleRejection {
    #[error("the battle is already over")]
    BattleFinished,
    #[error("a move learning decision is pending")]
    MoveLearnPending,
    #[error("no move learning decision is pending")]
    NoMoveLearnPending,
    #[error("cannot capture a trainer's creature")]
    CaptureFromTrainer,
    #[error("cannot flee from a trainer battle")]
    FleeFromTrainer,
    #[error("team is full")]
    TeamFull,
    #[error("team is empty")]
    TeamEmpty,
    #[error("lead creature has fainted")]
    LeadFainted,
    #[error("trainer {0} has already been defeated")]
    TrainerAlreadyDefeated(Id),
    #[error("item {0} is not in the inventory")]
    ItemNotInInventory(Id),
    #[error("item {0} cannot be used for this")]
    WrongItemKind(Id),
    #[error("not enough money to buy {0}")]
    InsufficientFunds(Id),
    #[error("move {0} is already known")]
    MoveAlreadyKnown(Id),
    #[error("move slot {0} is out of range")]
    InvalidMoveSlot(usize),
    #[error("cannot learn {0} without replacing a move")]
    MoveListFull(Id),
    #[error("team slot {0} is empty")]
    InvalidTeamSlot(usize),
    #[error("creature has fainted")]
    CreatureFainted,
}

/// Helper for an [`struct@Error`] wrapping a [`BattleRejection`].
#[track_caller]
pub fn rejection(rejection: BattleRejection) -> Error {
    rejection.wrap_error()
}

/// Extracts the [`BattleRejection`] behind an error, if any.
pub fn as_rejection(error: &Error) -> Option<&BattleRejection> {
    error.downcast_ref::<BattleRejection>()
}
