use std::borrow::Cow;

use crate::{
    battle::{
        BattleResult,
        EffectivenessTier,
        Side,
    },
    battle_event,
    log::{
        BattleLoggable,
        EventLog,
    },
    mons::Creature,
};

/// Identifies a creature in the log by its side and name.
pub struct CreatureDetails<'c> {
    pub side: Side,
    pub creature: &'c Creature,
}

impl BattleLoggable for CreatureDetails<'_> {
    fn log<'s>(&'s self, parts: &mut Vec<Cow<'s, str>>) {
        parts.push(Cow::Owned(self.side.to_string()));
        parts.push(Cow::Borrowed(self.creature.name()));
    }
}

fn details(side: Side, creature: &Creature) -> CreatureDetails<'_> {
    CreatureDetails { side, creature }
}

pub fn start_wild(log: &mut EventLog, creature: &Creature) {
    log.push(battle_event!("start", "wild", creature.name(), creature.level()));
}

pub fn start_trainer(log: &mut EventLog, name: &str, dialogue: &str) {
    log.push(battle_event!("start", "trainer", name));
    if !dialogue.is_empty() {
        log.push(battle_event!("dialogue", name, dialogue));
    }
}

pub fn switch(log: &mut EventLog, side: Side, creature: &Creature) {
    log.push(battle_event!(
        "switch",
        details(side, creature),
        creature.level()
    ));
}

pub fn use_move(log: &mut EventLog, side: Side, creature: &Creature, move_name: &str) {
    log.push(battle_event!("move", details(side, creature), move_name));
}

pub fn strike(log: &mut EventLog, side: Side, creature: &Creature) {
    log.push(battle_event!("strike", details(side, creature)));
}

pub fn miss(log: &mut EventLog, side: Side, creature: &Creature) {
    log.push(battle_event!("miss", details(side, creature)));
}

pub fn damage(
    log: &mut EventLog,
    side: Side,
    target: &Creature,
    damage: u32,
    effectiveness: EffectivenessTier,
) {
    log.push(battle_event!(
        "damage",
        details(side, target),
        damage,
        effectiveness
    ));
}

pub fn faint(log: &mut EventLog, side: Side, creature: &Creature) {
    log.push(battle_event!("faint", details(side, creature)));
}

pub fn experience(log: &mut EventLog, creature: &Creature, amount: u32) {
    log.push(battle_event!("exp", details(Side::Player, creature), amount));
}

pub fn level_up(log: &mut EventLog, creature: &Creature, level: u8) {
    log.push(battle_event!("levelup", details(Side::Player, creature), level));
}

pub fn learn_move(log: &mut EventLog, creature: &Creature, move_name: &str) {
    log.push(battle_event!(
        "learnmove",
        details(Side::Player, creature),
        move_name
    ));
}

pub fn pending_move(log: &mut EventLog, creature: &Creature, move_name: &str) {
    log.push(battle_event!(
        "pendingmove",
        details(Side::Player, creature),
        move_name
    ));
}

pub fn forget_move(log: &mut EventLog, creature: &Creature, move_name: &str) {
    log.push(battle_event!(
        "forgetmove",
        details(Side::Player, creature),
        move_name
    ));
}

pub fn decline_move(log: &mut EventLog, creature: &Creature, move_name: &str) {
    log.push(battle_event!(
        "declinemove",
        details(Side::Player, creature),
        move_name
    ));
}

pub fn heal(log: &mut EventLog, creature: &Creature, item_name: &str, amount: u16) {
    log.push(battle_event!(
        "heal",
        details(Side::Player, creature),
        item_name,
        amount
    ));
}

pub fn capture(log: &mut EventLog, creature: &Creature, item_name: &str, success: bool) {
    log.push(battle_event!(
        "capture",
        creature.name(),
        item_name,
        if success { "success" } else { "fail" }
    ));
}

pub fn reward(log: &mut EventLog, amount: u32) {
    log.push(battle_event!("reward", amount));
}

pub fn end(log: &mut EventLog, result: BattleResult) {
    let event = match result {
        BattleResult::Won => battle_event!("win"),
        BattleResult::Lost => battle_event!("lose"),
        BattleResult::Fled => battle_event!("flee"),
        BattleResult::Captured => battle_event!("captured"),
    };
    log.push(event);
}
