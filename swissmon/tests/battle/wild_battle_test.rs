use swissmon::{
    battle::{
        Battle,
        BattleResult,
        BattleState,
    },
    error::BattleRejection,
    player::Player,
};
use swissmon_data::{
    Id,
    LocalDataStore,
};
use swissmon_test_utils::{
    assert_new_logs_eq,
    assert_rejection,
    get_controlled_rng_for_battle,
    player_with_team,
    test_options,
    unit_draw,
};

fn start_wild<'d>(
    data: &'d LocalDataStore,
    player: &mut Player,
    species: &str,
    level: u8,
) -> Battle<'d> {
    Battle::start_wild(data, &test_options(), player, &Id::from(species), Some(level))
        .unwrap_or_else(|err| panic!("failed to start battle: {err:#}"))
}

#[test]
fn lead_defeats_wild_creature_and_gains_experience() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_wild(&data, &mut player, "lotus", 3);
    assert_new_logs_eq(&mut battle, &["start|wild|Lotus|3", "switch|player|Gnugnu|5"]);

    for _ in 0..3 {
        let outcome = battle.fight(&mut player, 1).unwrap();
        assert_eq!(outcome.attacks.len(), 2);
        assert_eq!(outcome.result, None);
    }
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Lick",
            "damage|opponent|Lotus|5|normal",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
            "move|player|Gnugnu|Lick",
            "damage|opponent|Lotus|5|normal",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
            "move|player|Gnugnu|Lick",
            "damage|opponent|Lotus|5|normal",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
        ],
    );

    let outcome = battle.fight(&mut player, 1).unwrap();
    assert_eq!(outcome.attacks.len(), 1);
    assert!(outcome.attacks[0].target_fainted);
    assert_eq!(outcome.result, Some(BattleResult::Won));
    assert_eq!(outcome.reward, None);
    assert!(!outcome.leveled_up());
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Lick",
            "damage|opponent|Lotus|5|normal",
            "faint|opponent|Lotus",
            "exp|player|Gnugnu|68",
            "win",
        ],
    );

    let lead = player.lead().unwrap();
    assert_eq!(lead.hp(), 8);
    assert_eq!(lead.experience(), 68);
    assert_eq!(battle.state(), &BattleState::Finished(BattleResult::Won));
    assert_eq!(battle.opponent().active_creature().hp(), 0);
    assert_eq!(player.inventory().money(), 3000);
    assert!(player.bestiary().contains(&Id::from("lotus")));
}

#[test]
fn fainted_lead_loses_battle() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_wild(&data, &mut player, "lavaflare", 20);
    battle.log_mut().read_out().count();

    let outcome = battle.fight(&mut player, 0).unwrap();
    assert_eq!(outcome.result, Some(BattleResult::Lost));
    assert!(outcome.attacks[1].target_fainted);
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Scratch",
            "damage|opponent|LavaFlare|3|normal",
            "move|opponent|LavaFlare|Fire Punch",
            "damage|player|Gnugnu|45|normal",
            "faint|player|Gnugnu",
            "lose",
        ],
    );
    assert!(player.lead().unwrap().is_fainted());

    assert_rejection(battle.fight(&mut player, 0), BattleRejection::BattleFinished);
    assert_rejection(battle.flee(), BattleRejection::BattleFinished);
    assert_rejection(
        battle.use_item(&mut player, &Id::from("potion")),
        BattleRejection::BattleFinished,
    );
    assert_eq!(player.inventory().count(&Id::from("potion")), 3);

    assert_rejection(
        Battle::start_wild(
            &data,
            &test_options(),
            &mut player,
            &Id::from("lotus"),
            Some(3),
        ),
        BattleRejection::LeadFainted,
    );
    player.heal_team();
    assert!(
        Battle::start_wild(
            &data,
            &test_options(),
            &mut player,
            &Id::from("lotus"),
            Some(3)
        )
        .is_ok()
    );
}

#[test]
fn missed_move_deals_no_damage() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    player
        .lead_mut()
        .unwrap()
        .learn_move(Id::from("inferno"), None)
        .unwrap();
    let mut battle = start_wild(&data, &mut player, "lotus", 3);
    battle.log_mut().read_out().count();

    // Inferno has 50% accuracy, so a roll of 75 misses.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, unit_draw(0.75))]);

    let outcome = battle.fight(&mut player, 2).unwrap();
    assert!(!outcome.attacks[0].hit);
    assert_eq!(outcome.attacks[0].damage, 0);
    assert_eq!(
        battle.opponent().active_creature().hp(),
        battle.opponent().active_creature().max_hp()
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Inferno",
            "miss|player|Gnugnu",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
        ],
    );
}

#[test]
fn empty_move_slot_falls_back_to_strike() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_wild(&data, &mut player, "lotus", 3);
    battle.log_mut().read_out().count();

    let outcome = battle.fight(&mut player, 7).unwrap();
    assert_eq!(outcome.attacks[0].move_id, None);
    assert_eq!(outcome.attacks[0].damage, 10);
    assert_new_logs_eq(
        &mut battle,
        &[
            "strike|player|Gnugnu",
            "damage|opponent|Lotus|10|normal",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
        ],
    );
}

#[test]
fn fleeing_ends_wild_battle_without_reward() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_wild(&data, &mut player, "blossom", 4);
    battle.log_mut().read_out().count();

    let outcome = battle.flee().unwrap();
    assert_eq!(outcome.result, Some(BattleResult::Fled));
    assert!(outcome.attacks.is_empty());
    assert_eq!(battle.reward(), 0);
    assert_new_logs_eq(&mut battle, &["flee"]);
    assert_eq!(player.lead().unwrap().experience(), 0);
}
