use anyhow::Result;
use swissmon_data::{
    DataStore,
    Id,
    TypeChart,
};
use swissmon_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        AttackContext,
        BattleEngineOptions,
        BattleResult,
        CaptureOutcome,
        DamageRandomization,
        ExperienceOutcome,
        HealOutcome,
        Opponent,
        Side,
        TurnOutcome,
        attack,
        battle_logs,
        select_random_move,
    },
    capture::CaptureModifiers,
    dex::Dex,
    error::{
        BattleRejection,
        rejection,
    },
    log::EventLog,
    mons::Creature,
    player::Player,
};

/// Where a battle is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleState {
    /// Waiting for the player's next action.
    PlayerTurn,
    /// The player's creature leveled up with a full move list and must decide whether to learn
    /// the move.
    PendingMoveLearn { move_id: Id },
    Finished(BattleResult),
}

/// The player's answer to a pending move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveLearnDecision {
    /// Forget the move in the given slot and learn the pending move in its place.
    Replace(usize),
    /// Keep the current moves.
    Decline,
}

/// A single encounter between the player's lead creature and a wild creature or a trainer.
///
/// The battle does not own the player. Every action takes the player that started the battle, and
/// all changes to the player's team and inventory are applied immediately.
///
/// Every action either fails with a [`BattleRejection`] and changes nothing, or succeeds and
/// returns a [`TurnOutcome`] describing what happened. The same events are also written to the
/// battle's [`EventLog`].
pub struct Battle<'d> {
    dex: Dex<'d>,
    type_chart: TypeChart,
    randomize_damage: DamageRandomization,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    opponent: Opponent,
    state: BattleState,
    log: EventLog,
    reward: u32,
}

impl<'d> Battle<'d> {
    /// Starts a battle against a wild creature.
    ///
    /// If no level is given, one is rolled from [`BattleEngineOptions::wild_level_range`]. The
    /// species is recorded in the player's bestiary.
    pub fn start_wild(
        data: &'d dyn DataStore,
        options: &BattleEngineOptions,
        player: &mut Player,
        species: &Id,
        level: Option<u8>,
    ) -> Result<Self> {
        Self::check_player_can_battle(player)?;
        let dex = Dex::new(data);
        let mut prng = options.create_prng();
        let level = match level {
            Some(level) => level,
            None => options.roll_wild_level(prng.as_mut()),
        };
        let creature = Creature::new(&dex, species, level, None, prng.as_mut())?;
        player.record_encounter(creature.species_id());

        let mut battle = Self::new(dex, options, prng, Opponent::wild(creature))?;
        let creature = battle.opponent.active_creature();
        log::info!(
            "wild battle started against {} (level {})",
            creature.name(),
            creature.level()
        );
        battle_logs::start_wild(&mut battle.log, creature);
        battle.log_player_lead(player)?;
        Ok(battle)
    }

    /// Starts a battle against a trainer.
    ///
    /// Fails if the player has already defeated the trainer.
    pub fn start_trainer(
        data: &'d dyn DataStore,
        options: &BattleEngineOptions,
        player: &mut Player,
        trainer: &Id,
    ) -> Result<Self> {
        Self::check_player_can_battle(player)?;
        if player.has_defeated(trainer) {
            return Err(rejection(BattleRejection::TrainerAlreadyDefeated(
                trainer.clone(),
            )));
        }
        let dex = Dex::new(data);
        let trainer_data = dex.trainer(trainer)?;
        let mut prng = options.create_prng();
        let opponent = Opponent::trainer(&dex, trainer.clone(), trainer_data, prng.as_mut())?;
        player.record_encounter(opponent.active_creature().species_id());

        let mut battle = Self::new(dex, options, prng, opponent)?;
        if let Opponent::Trainer { data, creature, .. } = &battle.opponent {
            log::info!("trainer battle started against {}", data.name);
            battle_logs::start_trainer(&mut battle.log, &data.name, &data.dialogue);
            battle_logs::switch(&mut battle.log, Side::Opponent, creature);
        }
        battle.log_player_lead(player)?;
        Ok(battle)
    }

    fn new(
        dex: Dex<'d>,
        options: &BattleEngineOptions,
        prng: Box<dyn PseudoRandomNumberGenerator>,
        opponent: Opponent,
    ) -> Result<Self> {
        Ok(Self {
            type_chart: dex.type_chart()?,
            dex,
            randomize_damage: options.randomize_damage,
            prng,
            opponent,
            state: BattleState::PlayerTurn,
            log: EventLog::new(),
            reward: 0,
        })
    }

    fn check_player_can_battle(player: &Player) -> Result<()> {
        if player.lead()?.is_fainted() {
            return Err(rejection(BattleRejection::LeadFainted));
        }
        Ok(())
    }

    fn log_player_lead(&mut self, player: &Player) -> Result<()> {
        battle_logs::switch(&mut self.log, Side::Player, player.lead()?);
        Ok(())
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// The result of the battle, once it is over.
    pub fn result(&self) -> Option<BattleResult> {
        match self.state {
            BattleState::Finished(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.result().is_some()
    }

    /// The move waiting for a [`MoveLearnDecision`], if any.
    pub fn pending_move(&self) -> Option<&Id> {
        match &self.state {
            BattleState::PendingMoveLearn { move_id } => Some(move_id),
            _ => None,
        }
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    /// Currency paid out by a defeated trainer.
    pub fn reward(&self) -> u32 {
        self.reward
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// The battle's random number generator.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    fn check_can_act(&self) -> Result<()> {
        match self.state {
            BattleState::PlayerTurn => Ok(()),
            BattleState::PendingMoveLearn { .. } => {
                Err(rejection(BattleRejection::MoveLearnPending))
            }
            BattleState::Finished(_) => Err(rejection(BattleRejection::BattleFinished)),
        }
    }

    fn attack_context(&mut self) -> (AttackContext<'_, 'd>, &mut Opponent) {
        (
            AttackContext {
                dex: &self.dex,
                type_chart: &self.type_chart,
                randomize_damage: self.randomize_damage,
                prng: self.prng.as_mut(),
                log: &mut self.log,
            },
            &mut self.opponent,
        )
    }

    /// Attacks with the move in the given slot, then lets the opponent retaliate.
    ///
    /// An empty slot is not an error: the lead attacks with a flat strike instead.
    pub fn fight(&mut self, player: &mut Player, move_index: usize) -> Result<TurnOutcome> {
        self.check_can_act()?;
        let lead = player.lead()?;
        let mut outcome = TurnOutcome::default();
        let (mut context, opponent) = self.attack_context();
        let result = attack(
            &mut context,
            Side::Player,
            lead,
            opponent.active_creature_mut(),
            move_index,
        )?;
        let opponent_fainted = result.target_fainted;
        outcome.attacks.push(result);

        if opponent_fainted {
            self.opponent_fainted(player, &mut outcome)?;
        } else {
            self.opponent_turn(player, &mut outcome)?;
        }
        Ok(outcome)
    }

    /// Uses an item from the player's inventory.
    ///
    /// Capture items attempt a capture. Healing items heal the lead without giving the opponent a
    /// turn.
    pub fn use_item(&mut self, player: &mut Player, item: &Id) -> Result<TurnOutcome> {
        self.check_can_act()?;
        let item_data = self.dex.item(item)?;
        if item_data.catch_bonus().is_some() {
            return self.capture(player, item);
        }
        let Some(amount) = item_data.heal_amount() else {
            return Err(rejection(BattleRejection::WrongItemKind(item.clone())));
        };
        if !player.inventory().has_item(item) {
            return Err(rejection(BattleRejection::ItemNotInInventory(item.clone())));
        }
        let lead = player.lead_mut()?;
        let healed = lead.heal(amount);
        battle_logs::heal(&mut self.log, lead, &item_data.name, healed);
        let target_name = lead.name().to_owned();
        player.inventory_mut().use_item(item)?;
        Ok(TurnOutcome {
            heal: Some(HealOutcome {
                item: item.clone(),
                target_name,
                healed,
            }),
            ..Default::default()
        })
    }

    /// Throws a capture item at the wild creature.
    ///
    /// The item is consumed whether or not the capture succeeds. On failure, the opponent
    /// retaliates.
    pub fn capture(&mut self, player: &mut Player, item: &Id) -> Result<TurnOutcome> {
        self.check_can_act()?;
        if !self.opponent.can_capture() {
            return Err(rejection(BattleRejection::CaptureFromTrainer));
        }
        if player.is_team_full() {
            return Err(rejection(BattleRejection::TeamFull));
        }
        let item_data = self.dex.item(item)?;
        let Some(ball_modifier) = item_data.catch_bonus() else {
            return Err(rejection(BattleRejection::WrongItemKind(item.clone())));
        };
        player.inventory_mut().use_item(item)?;

        let target = self.opponent.active_creature();
        let modifiers = CaptureModifiers::new(target, ball_modifier);
        let success = modifiers.attempt(self.prng.as_mut());
        battle_logs::capture(&mut self.log, target, &item_data.name, success);
        let mut outcome = TurnOutcome {
            capture: Some(CaptureOutcome {
                item: item.clone(),
                target_name: target.name().to_owned(),
                modifiers,
                success,
            }),
            ..Default::default()
        };

        if success {
            let captured = target.clone();
            log::info!("captured {} (level {})", captured.name(), captured.level());
            player.add_to_team(captured)?;
            self.finish(BattleResult::Captured, &mut outcome);
        } else {
            self.opponent_turn(player, &mut outcome)?;
        }
        Ok(outcome)
    }

    /// Runs from a wild battle. Always succeeds.
    pub fn flee(&mut self) -> Result<TurnOutcome> {
        self.check_can_act()?;
        if !self.opponent.can_flee() {
            return Err(rejection(BattleRejection::FleeFromTrainer));
        }
        let mut outcome = TurnOutcome::default();
        self.finish(BattleResult::Fled, &mut outcome);
        Ok(outcome)
    }

    /// Resolves a pending move, then continues the battle where it left off.
    ///
    /// An invalid slot is rejected and the move stays pending.
    pub fn decide_move_learn(
        &mut self,
        player: &mut Player,
        decision: MoveLearnDecision,
    ) -> Result<TurnOutcome> {
        let move_id = match &self.state {
            BattleState::PendingMoveLearn { move_id } => move_id.clone(),
            BattleState::PlayerTurn => return Err(rejection(BattleRejection::NoMoveLearnPending)),
            BattleState::Finished(_) => return Err(rejection(BattleRejection::BattleFinished)),
        };
        let move_name = self.dex.move_data(&move_id)?.name;
        let lead = player.lead_mut()?;
        match decision {
            MoveLearnDecision::Replace(slot) => {
                if slot >= lead.moves().len() {
                    return Err(rejection(BattleRejection::InvalidMoveSlot(slot)));
                }
                if let Some(forgotten) = lead.learn_move(move_id, Some(slot))? {
                    let forgotten_name = self.dex.move_data(&forgotten)?.name;
                    battle_logs::forget_move(&mut self.log, lead, &forgotten_name);
                }
                battle_logs::learn_move(&mut self.log, lead, &move_name);
            }
            MoveLearnDecision::Decline => {
                battle_logs::decline_move(&mut self.log, lead, &move_name);
            }
        }

        self.state = BattleState::PlayerTurn;
        let mut outcome = TurnOutcome::default();
        self.advance_opponent(player, &mut outcome)?;
        Ok(outcome)
    }

    fn opponent_turn(&mut self, player: &mut Player, outcome: &mut TurnOutcome) -> Result<()> {
        let move_index = select_random_move(self.prng.as_mut(), self.opponent.active_creature());
        let lead = player.lead_mut()?;
        let (mut context, opponent) = self.attack_context();
        let result = attack(
            &mut context,
            Side::Opponent,
            opponent.active_creature(),
            lead,
            move_index,
        )?;
        let lead_fainted = result.target_fainted;
        outcome.attacks.push(result);
        if lead_fainted {
            self.finish(BattleResult::Lost, outcome);
        }
        Ok(())
    }

    fn opponent_fainted(&mut self, player: &mut Player, outcome: &mut TurnOutcome) -> Result<()> {
        let amount = self.opponent.active_creature().species().base_exp_yield;
        let lead = player.lead_mut()?;
        battle_logs::experience(&mut self.log, lead, amount);
        let gain = lead.gain_experience(amount);
        for level in &gain.levels {
            log::info!("{} grew to level {level}", lead.name());
            battle_logs::level_up(&mut self.log, lead, *level);
        }
        for move_id in &gain.learned_moves {
            let move_name = self.dex.move_data(move_id)?.name;
            battle_logs::learn_move(&mut self.log, lead, &move_name);
        }

        let pending = gain.pending_move.clone();
        outcome.experience = Some(ExperienceOutcome {
            creature_name: lead.name().to_owned(),
            amount,
            gain,
        });
        if let Some(move_id) = pending {
            let move_name = self.dex.move_data(&move_id)?.name;
            battle_logs::pending_move(&mut self.log, lead, &move_name);
            outcome.pending_move = Some(move_id.clone());
            self.state = BattleState::PendingMoveLearn { move_id };
            return Ok(());
        }

        self.advance_opponent(player, outcome)
    }

    fn advance_opponent(&mut self, player: &mut Player, outcome: &mut TurnOutcome) -> Result<()> {
        if self
            .opponent
            .advance_after_defeat(&self.dex, self.prng.as_mut())?
        {
            let creature = self.opponent.active_creature();
            player.record_encounter(creature.species_id());
            battle_logs::switch(&mut self.log, Side::Opponent, creature);
            outcome.next_opponent = Some(creature.name().to_owned());
            return Ok(());
        }

        if let Some(trainer) = self.opponent.trainer_id().cloned() {
            let reward = self.opponent.reward();
            player.inventory_mut().add_money(reward);
            log::info!("defeated trainer {trainer}, earning {reward}");
            player.mark_defeated(trainer);
            self.reward = reward;
            outcome.reward = Some(reward);
            battle_logs::reward(&mut self.log, reward);
        }
        self.finish(BattleResult::Won, outcome);
        Ok(())
    }

    fn finish(&mut self, result: BattleResult, outcome: &mut TurnOutcome) {
        log::info!("battle against {} ended: {result}", self.opponent.name());
        battle_logs::end(&mut self.log, result);
        self.state = BattleState::Finished(result);
        outcome.result = Some(result);
    }
}
