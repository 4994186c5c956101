mod battle;
mod battle_actions;
mod battle_logs;
mod damage;
mod opponent;
mod options;
mod outcome;

pub use battle::{
    Battle,
    BattleState,
    MoveLearnDecision,
};
pub use battle_actions::{
    AttackContext,
    attack,
    select_random_move,
};
pub use battle_logs::CreatureDetails;
pub use damage::{
    base_damage,
    fallback_damage,
    final_damage,
};
pub use opponent::Opponent;
pub use options::{
    BattleEngineOptions,
    DamageRandomization,
};
pub use outcome::{
    AttackOutcome,
    BattleResult,
    CaptureOutcome,
    EffectivenessTier,
    ExperienceOutcome,
    HealOutcome,
    Side,
    TurnOutcome,
};
