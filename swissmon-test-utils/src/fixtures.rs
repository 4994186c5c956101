use swissmon::{
    battle::{
        BattleEngineOptions,
        DamageRandomization,
    },
    dex::Dex,
    mons::Creature,
    player::{
        Inventory,
        Player,
    },
};
use swissmon_data::{
    DataStore,
    Id,
    Nature,
};
use swissmon_prng::PseudoRandomNumberGenerator;

use crate::ControlledRandomNumberGenerator;

/// Options for deterministic battles: a fixed seed, no damage variance, and a controlled RNG.
pub fn test_options() -> BattleEngineOptions {
    BattleEngineOptions {
        seed: Some(0),
        randomize_damage: DamageRandomization::Max,
        rng_factory: |seed| -> Box<dyn PseudoRandomNumberGenerator> {
            Box::new(ControlledRandomNumberGenerator::new(seed))
        },
        ..Default::default()
    }
}

/// Creates a player with the starter inventory and the given team of Hardy creatures.
pub fn player_with_team(data: &dyn DataStore, team: &[(&str, u8)]) -> Player {
    let dex = Dex::new(data);
    let mut player = Player::new(test_options().max_team_size);
    for (species, level) in team {
        let creature = Creature::with_nature(&dex, &Id::from(*species), *level, Nature::Hardy)
            .unwrap_or_else(|err| panic!("failed to create {species}: {err:#}"));
        player.record_encounter(creature.species_id());
        player
            .add_to_team(creature)
            .unwrap_or_else(|err| panic!("failed to add {species}: {err:#}"));
    }
    *player.inventory_mut() = Inventory::starter();
    player
}
