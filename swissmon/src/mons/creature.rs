use ahash::HashSet;
use anyhow::Result;
use swissmon_data::{
    Id,
    LearnSet,
    Nature,
    SpeciesData,
    StatTable,
    Type,
    TypeChart,
};
use swissmon_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    dex::Dex,
    error::{
        BattleRejection,
        ValidationError,
        WrapError,
        WrapOptionError,
        general_error,
        rejection,
    },
    mons::{
        Status,
        calculate_stats,
        exp_to_next_level,
    },
    save::CreatureData,
};

/// Highest level a creature can reach.
pub const MAX_LEVEL: u8 = 100;
/// Number of moves a creature can know at once.
pub const MAX_MOVES: usize = 4;
/// Level used when no level is given.
pub const DEFAULT_LEVEL: u8 = 5;
/// Move given to a creature whose learnset yields nothing at its level.
pub const FALLBACK_MOVE: &str = "tackle";

/// The result of awarding experience to a creature.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExperienceGain {
    /// Every level reached, in order.
    pub levels: Vec<u8>,
    /// Moves appended to the move list automatically.
    pub learned_moves: Vec<Id>,
    /// A move that could not be learned because the move list is full.
    ///
    /// The caller must decide whether to replace an existing move.
    pub pending_move: Option<Id>,
}

impl ExperienceGain {
    pub fn leveled_up(&self) -> bool {
        !self.levels.is_empty()
    }
}

/// A single battling creature.
///
/// Stats are always derived from the species, level and nature, so two creatures that agree on
/// those three also agree on every stat.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    species_id: Id,
    species: SpeciesData,
    level: u8,
    nature: Nature,
    stats: StatTable,
    hp: u16,
    experience: u32,
    exp_to_next_level: u32,
    moves: Vec<Id>,
    status: Option<Status>,
}

impl Creature {
    /// Creates a new creature at full health.
    ///
    /// If no nature is given, one is chosen uniformly at random. The move list is filled by
    /// replaying the learnset up to the creature's level.
    pub fn new(
        dex: &Dex,
        species: &Id,
        level: u8,
        nature: Option<Nature>,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Self> {
        let species_data = dex.species(species)?;
        let nature = match nature {
            Some(nature) => nature,
            None => *rand_util::sample_slice(prng, &Nature::ALL)
                .wrap_expectation("no nature to choose from")?,
        };
        let mut creature = Self::from_parts(species.clone(), species_data, level, nature)?;
        creature.moves = initial_moves(&creature.species.learnset, level);
        Ok(creature)
    }

    /// Creates a new creature with a fixed nature.
    pub fn with_nature(dex: &Dex, species: &Id, level: u8, nature: Nature) -> Result<Self> {
        let species_data = dex.species(species)?;
        let mut creature = Self::from_parts(species.clone(), species_data, level, nature)?;
        creature.moves = initial_moves(&creature.species.learnset, level);
        Ok(creature)
    }

    fn from_parts(species_id: Id, species: SpeciesData, level: u8, nature: Nature) -> Result<Self> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(general_error(format!(
                "level {level} is out of range for {}",
                species.name
            )));
        }
        let stats = calculate_stats(&species.base_stats, level, nature);
        Ok(Self {
            species_id,
            hp: stats.hp,
            stats,
            species,
            level,
            nature,
            experience: 0,
            exp_to_next_level: exp_to_next_level(level),
            moves: Vec::new(),
            status: None,
        })
    }

    /// Reconstructs a creature from saved data.
    ///
    /// Fails if the data refers to unknown resources or breaks any creature invariant.
    pub fn from_data(dex: &Dex, data: &CreatureData) -> Result<Self> {
        let species = dex.species(&data.species)?;
        let mut creature = Self::from_parts(data.species.clone(), species, data.level, data.nature)
            .map_err(|err| err.wrap_error_with_message(format!("invalid {}", data.species)))?;

        let mut problems = ValidationError::default();
        if data.moves.is_empty() {
            problems.add("creature must know at least one move");
        }
        if data.moves.len() > MAX_MOVES {
            problems.add(format!(
                "creature knows {} moves, but the limit is {MAX_MOVES}",
                data.moves.len()
            ));
        }
        let mut seen = HashSet::default();
        for move_id in &data.moves {
            if !seen.insert(move_id) {
                problems.add(format!("move {move_id} is listed more than once"));
            }
            if dex.data().get_move(move_id)?.is_none() {
                problems.add(format!("move {move_id} does not exist"));
            }
        }
        if data.hp > creature.max_hp() {
            problems.add(format!(
                "hp {} exceeds max hp {}",
                data.hp,
                creature.max_hp()
            ));
        }
        if data.level < MAX_LEVEL && data.experience >= creature.exp_to_next_level {
            problems.add(format!(
                "experience {} reaches the next level threshold {}",
                data.experience, creature.exp_to_next_level
            ));
        }
        problems.into_result().map_err(|err| {
            err.wrap_error_with_message(format!("invalid data for creature {}", data.species))
        })?;

        creature.hp = data.hp;
        creature.experience = data.experience;
        creature.moves = data.moves.clone();
        creature.status = data.status;
        Ok(creature)
    }

    /// Captures the state needed to reconstruct this creature.
    pub fn to_data(&self) -> CreatureData {
        CreatureData {
            species: self.species_id.clone(),
            level: self.level,
            nature: self.nature,
            hp: self.hp,
            experience: self.experience,
            moves: self.moves.clone(),
            status: self.status,
        }
    }

    pub fn species_id(&self) -> &Id {
        &self.species_id
    }

    pub fn species(&self) -> &SpeciesData {
        &self.species
    }

    /// The display name of the creature.
    pub fn name(&self) -> &str {
        &self.species.name
    }

    pub fn types(&self) -> Vec<Type> {
        self.species.types()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn hp(&self) -> u16 {
        self.hp
    }

    pub fn attack(&self) -> u16 {
        self.stats.atk
    }

    pub fn defense(&self) -> u16 {
        self.stats.def
    }

    pub fn speed(&self) -> u16 {
        self.stats.spe
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn exp_to_next_level(&self) -> u32 {
        self.exp_to_next_level
    }

    pub fn moves(&self) -> &[Id] {
        &self.moves
    }

    /// The move in the given slot, if any.
    pub fn move_id(&self, index: usize) -> Option<&Id> {
        self.moves.get(index)
    }

    pub fn knows_move(&self, id: &Id) -> bool {
        self.moves.contains(id)
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.status = status;
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Deals damage to the creature, returning whether it fainted.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let amount = amount.min(self.hp as u32) as u16;
        self.hp -= amount;
        self.is_fainted()
    }

    /// Heals the creature, returning how much HP was actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp());
        self.hp - before
    }

    /// Restores the creature to full HP and clears its status.
    pub fn restore(&mut self) {
        self.hp = self.max_hp();
        self.status = None;
    }

    /// The damage multiplier of a move of the given type against this creature.
    pub fn type_effectiveness(&self, type_chart: &TypeChart, move_type: Type) -> f64 {
        type_chart.multiplier(move_type, &self.types())
    }

    /// Awards experience, leveling up as many times as the experience allows.
    ///
    /// Each level-up raises current HP by exactly as much as max HP grew. Moves learned at a new
    /// level are appended while there is room. Once the move list is full, the last move that did
    /// not fit is returned as pending for the caller to resolve with [`Self::learn_move`].
    pub fn gain_experience(&mut self, amount: u32) -> ExperienceGain {
        let mut gain = ExperienceGain::default();
        self.experience = self.experience.saturating_add(amount);
        while self.level < MAX_LEVEL && self.experience >= self.exp_to_next_level {
            self.experience -= self.exp_to_next_level;
            self.level_up();
            gain.levels.push(self.level);

            let new_moves = self.species.learnset.at_level(self.level).to_vec();
            for move_id in new_moves {
                if self.knows_move(&move_id) {
                    continue;
                }
                if self.moves.len() < MAX_MOVES {
                    self.moves.push(move_id.clone());
                    gain.learned_moves.push(move_id);
                } else {
                    gain.pending_move = Some(move_id);
                }
            }
        }
        gain
    }

    fn level_up(&mut self) {
        let old_max_hp = self.max_hp();
        self.level += 1;
        self.stats = calculate_stats(&self.species.base_stats, self.level, self.nature);
        let growth = self.max_hp().saturating_sub(old_max_hp);
        self.hp = self.hp.saturating_add(growth).min(self.max_hp());
        self.exp_to_next_level = exp_to_next_level(self.level);
    }

    /// Teaches a move to the creature.
    ///
    /// If the move list is full, `replace_index` must name the slot to overwrite. Returns the move
    /// that was replaced, if any.
    pub fn learn_move(&mut self, move_id: Id, replace_index: Option<usize>) -> Result<Option<Id>> {
        if self.knows_move(&move_id) {
            return Err(rejection(BattleRejection::MoveAlreadyKnown(move_id)));
        }
        if self.moves.len() < MAX_MOVES {
            self.moves.push(move_id);
            return Ok(None);
        }
        match replace_index {
            Some(index) => match self.moves.get_mut(index) {
                Some(slot) => Ok(Some(std::mem::replace(slot, move_id))),
                None => Err(rejection(BattleRejection::InvalidMoveSlot(index))),
            },
            None => Err(rejection(BattleRejection::MoveListFull(move_id))),
        }
    }
}

/// Replays the learnset up to the given level, evicting the oldest move when the list is full.
fn initial_moves(learnset: &LearnSet, level: u8) -> Vec<Id> {
    let mut moves: Vec<Id> = Vec::with_capacity(MAX_MOVES);
    for (_, move_id) in learnset.up_to_level(level) {
        if moves.contains(move_id) {
            continue;
        }
        if moves.len() == MAX_MOVES {
            moves.remove(0);
        }
        moves.push(move_id.clone());
    }
    if moves.is_empty() {
        moves.push(Id::from(FALLBACK_MOVE));
    }
    moves
}
