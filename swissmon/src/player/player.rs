use std::collections::BTreeSet;

use anyhow::Result;
use swissmon_data::Id;
use swissmon_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::BattleEngineOptions,
    dex::Dex,
    error::{
        BattleRejection,
        ValidationError,
        WrapError,
        rejection,
    },
    mons::{
        Creature,
        DEFAULT_LEVEL,
    },
    player::Inventory,
    save::SaveData,
};

/// Species granted to the player at the start of a new game.
pub const STARTER_SPECIES: &str = "gnugnu";

/// The player's persistent state: their team, inventory and progress.
///
/// The first creature on the team is the lead, which is sent out at the start of every battle.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    team: Vec<Creature>,
    inventory: Inventory,
    bestiary: BTreeSet<Id>,
    defeated_trainers: BTreeSet<Id>,
    max_team_size: usize,
}

impl Player {
    /// Creates a player with an empty team and inventory.
    pub fn new(max_team_size: usize) -> Self {
        Self {
            team: Vec::new(),
            inventory: Inventory::new(),
            bestiary: BTreeSet::new(),
            defeated_trainers: BTreeSet::new(),
            max_team_size,
        }
    }

    /// Creates the player for a new game, with the starter creature and inventory.
    pub fn new_game(
        dex: &Dex,
        options: &BattleEngineOptions,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Self> {
        let mut player = Self::new(options.max_team_size);
        let starter = Creature::new(dex, &Id::from(STARTER_SPECIES), DEFAULT_LEVEL, None, prng)?;
        player.record_encounter(starter.species_id());
        player.add_to_team(starter)?;
        player.inventory = Inventory::starter();
        Ok(player)
    }

    /// Restores a player from saved data.
    pub fn from_data(dex: &Dex, data: &SaveData, max_team_size: usize) -> Result<Self> {
        let mut problems = ValidationError::default();
        if data.team.len() > max_team_size {
            problems.add(format!(
                "team has {} creatures, but the limit is {max_team_size}",
                data.team.len()
            ));
        }
        for item in data.inventory.items.keys() {
            if dex.data().get_item(item)?.is_none() {
                problems.add(format!("item {item} does not exist"));
            }
        }
        problems
            .into_result()
            .map_err(|err| err.wrap_error_with_message("invalid save data"))?;

        let team = data
            .team
            .iter()
            .enumerate()
            .map(|(i, creature)| {
                Creature::from_data(dex, creature)
                    .map_err(|err| err.wrap_error_with_message(format!("invalid team slot {i}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            team,
            inventory: Inventory::from_data(&data.inventory),
            bestiary: data.bestiary.clone(),
            defeated_trainers: data.defeated_trainers.clone(),
            max_team_size,
        })
    }

    pub fn to_data(&self) -> SaveData {
        SaveData {
            team: self.team.iter().map(|creature| creature.to_data()).collect(),
            inventory: self.inventory.to_data(),
            bestiary: self.bestiary.clone(),
            defeated_trainers: self.defeated_trainers.clone(),
        }
    }

    pub fn team(&self) -> &[Creature] {
        &self.team
    }

    pub fn creature(&self, slot: usize) -> Option<&Creature> {
        self.team.get(slot)
    }

    pub fn creature_mut(&mut self, slot: usize) -> Option<&mut Creature> {
        self.team.get_mut(slot)
    }

    /// The creature that battles.
    pub fn lead(&self) -> Result<&Creature> {
        self.team
            .first()
            .ok_or_else(|| rejection(BattleRejection::TeamEmpty))
    }

    pub fn lead_mut(&mut self) -> Result<&mut Creature> {
        self.team
            .first_mut()
            .ok_or_else(|| rejection(BattleRejection::TeamEmpty))
    }

    pub fn max_team_size(&self) -> usize {
        self.max_team_size
    }

    pub fn is_team_full(&self) -> bool {
        self.team.len() >= self.max_team_size
    }

    pub fn add_to_team(&mut self, creature: Creature) -> Result<()> {
        if self.is_team_full() {
            return Err(rejection(BattleRejection::TeamFull));
        }
        self.team.push(creature);
        Ok(())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Species the player has encountered, sorted by ID.
    pub fn bestiary(&self) -> &BTreeSet<Id> {
        &self.bestiary
    }

    /// Records an encountered species, returning whether it was new.
    pub fn record_encounter(&mut self, species: &Id) -> bool {
        self.bestiary.insert(species.clone())
    }

    pub fn has_defeated(&self, trainer: &Id) -> bool {
        self.defeated_trainers.contains(trainer)
    }

    pub fn defeated_trainers(&self) -> &BTreeSet<Id> {
        &self.defeated_trainers
    }

    pub fn mark_defeated(&mut self, trainer: Id) {
        self.defeated_trainers.insert(trainer);
    }

    /// Restores every creature on the team, as done at a healing center.
    pub fn heal_team(&mut self) {
        for creature in &mut self.team {
            creature.restore();
        }
        log::debug!("healed {} creatures", self.team.len());
    }

    /// Uses a healing item on a creature outside of battle.
    ///
    /// Returns how much HP was restored. Fainted creatures cannot be healed by items.
    pub fn use_item_on(&mut self, dex: &Dex, item: &Id, slot: usize) -> Result<u16> {
        let item_data = dex.item(item)?;
        let Some(amount) = item_data.heal_amount() else {
            return Err(rejection(BattleRejection::WrongItemKind(item.clone())));
        };
        let creature = self
            .team
            .get(slot)
            .ok_or_else(|| rejection(BattleRejection::InvalidTeamSlot(slot)))?;
        if creature.is_fainted() {
            return Err(rejection(BattleRejection::CreatureFainted));
        }
        self.inventory.use_item(item)?;
        let creature = self
            .team
            .get_mut(slot)
            .ok_or_else(|| rejection(BattleRejection::InvalidTeamSlot(slot)))?;
        Ok(creature.heal(amount))
    }
}
