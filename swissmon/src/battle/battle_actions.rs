use anyhow::Result;
use swissmon_data::TypeChart;
use swissmon_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        AttackOutcome,
        DamageRandomization,
        EffectivenessTier,
        Side,
        base_damage,
        battle_logs,
        fallback_damage,
        final_damage,
    },
    dex::Dex,
    log::EventLog,
    mons::Creature,
};

/// Everything an attack needs from the battle, borrowed separately from the creatures involved.
pub struct AttackContext<'a, 'd> {
    pub dex: &'a Dex<'d>,
    pub type_chart: &'a TypeChart,
    pub randomize_damage: DamageRandomization,
    pub prng: &'a mut dyn PseudoRandomNumberGenerator,
    pub log: &'a mut EventLog,
}

/// Chooses a move slot uniformly at random.
///
/// Draws once, unless the creature knows no moves at all.
pub fn select_random_move(prng: &mut dyn PseudoRandomNumberGenerator, creature: &Creature) -> usize {
    match creature.moves().len() {
        0 => 0,
        len => rand_util::range(prng, 0, len as u64) as usize,
    }
}

/// Resolves a single attack from `attacker` against `defender`.
///
/// An empty slot or a move with no data falls back to a flat strike that cannot miss.
pub fn attack(
    context: &mut AttackContext,
    side: Side,
    attacker: &Creature,
    defender: &mut Creature,
    move_index: usize,
) -> Result<AttackOutcome> {
    let move_data = match attacker.move_id(move_index) {
        Some(move_id) => context
            .dex
            .data()
            .get_move(move_id)?
            .map(|data| (move_id.clone(), data)),
        None => None,
    };
    let Some((move_id, move_data)) = move_data else {
        log::debug!(
            "{} has no usable move in slot {move_index}, striking instead",
            attacker.name()
        );
        return Ok(strike(context, side, attacker, defender));
    };

    battle_logs::use_move(context.log, side, attacker, &move_data.name);
    let mut outcome = AttackOutcome {
        attacker: side,
        attacker_name: attacker.name().to_owned(),
        move_id: Some(move_id),
        move_name: Some(move_data.name.clone()),
        hit: false,
        multiplier: 1.0,
        effectiveness: EffectivenessTier::Normal,
        damage: 0,
        target_fainted: false,
    };

    let roll = rand_util::unit(context.prng) * 100.0;
    log::debug!(
        "{} used {}: accuracy roll {roll:.2} against {}",
        attacker.name(),
        move_data.name,
        move_data.accuracy
    );
    if roll > move_data.accuracy as f64 {
        battle_logs::miss(context.log, side, attacker);
        return Ok(outcome);
    }
    outcome.hit = true;

    let multiplier = defender.type_effectiveness(context.type_chart, move_data.primary_type);
    outcome.multiplier = multiplier;
    outcome.effectiveness = EffectivenessTier::from_multiplier(multiplier);

    if !move_data.is_damaging() {
        return Ok(outcome);
    }

    let base = base_damage(
        attacker.level(),
        move_data.base_power,
        attacker.attack(),
        defender.defense(),
    );
    let factor = context.randomize_damage.factor(context.prng);
    let damage = final_damage(base, multiplier, factor);
    log::debug!(
        "{} against {}: base damage {base}, multiplier {multiplier}, factor {factor:.3}, damage {damage}",
        move_data.name,
        defender.name()
    );

    outcome.damage = damage;
    outcome.target_fainted = defender.take_damage(damage);
    battle_logs::damage(
        context.log,
        side.foe(),
        defender,
        damage,
        outcome.effectiveness,
    );
    if outcome.target_fainted {
        battle_logs::faint(context.log, side.foe(), defender);
    }
    Ok(outcome)
}

fn strike(
    context: &mut AttackContext,
    side: Side,
    attacker: &Creature,
    defender: &mut Creature,
) -> AttackOutcome {
    battle_logs::strike(context.log, side, attacker);
    let damage = fallback_damage(attacker.attack());
    let target_fainted = defender.take_damage(damage);
    battle_logs::damage(
        context.log,
        side.foe(),
        defender,
        damage,
        EffectivenessTier::Normal,
    );
    if target_fainted {
        battle_logs::faint(context.log, side.foe(), defender);
    }
    AttackOutcome {
        attacker: side,
        attacker_name: attacker.name().to_owned(),
        move_id: None,
        move_name: None,
        hit: true,
        multiplier: 1.0,
        effectiveness: EffectivenessTier::Normal,
        damage,
        target_fainted,
    }
}
