use swissmon::{
    battle::{
        Battle,
        BattleResult,
    },
    capture::MAX_CAPTURE_RATE,
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

fn start_lotus_battle<'d>(data: &'d LocalDataStore, player: &mut Player) -> Battle<'d> {
    let mut battle =
        Battle::start_wild(data, &test_options(), player, &Id::from("lotus"), Some(3)).unwrap();
    battle.log_mut().read_out().count();
    battle
}

#[test]
fn successful_capture_adds_creature_to_team() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_lotus_battle(&data, &mut player);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, unit_draw(0.0))]);

    let outcome = battle.capture(&mut player, &Id::from("pokeball")).unwrap();
    assert_eq!(outcome.result, Some(BattleResult::Captured));
    let capture = outcome.capture.unwrap();
    assert!(capture.success);
    assert_eq!(capture.target_name, "Lotus");
    assert_eq!(capture.modifiers.base_rate, 0.65);
    assert_eq!(capture.modifiers.hp_modifier, 1.0);
    assert_eq!(capture.modifiers.ball_modifier, 1.0);
    assert!((capture.modifiers.final_rate() - 0.663).abs() < 1e-9);
    assert_new_logs_eq(
        &mut battle,
        &["capture|Lotus|Poké Ball|success", "captured"],
    );

    assert_eq!(player.team().len(), 2);
    let captured = player.creature(1).unwrap();
    assert_eq!(captured.species_id(), &Id::from("lotus"));
    assert_eq!(captured.level(), 3);
    assert_eq!(captured.hp(), captured.max_hp());
    assert_eq!(player.inventory().count(&Id::from("pokeball")), 4);
    assert!(player.bestiary().contains(&Id::from("lotus")));

    assert_rejection(
        battle.capture(&mut player, &Id::from("pokeball")),
        BattleRejection::BattleFinished,
    );
}

#[test]
fn failed_capture_consumes_ball_and_opponent_retaliates() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_lotus_battle(&data, &mut player);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, unit_draw(0.9))]);

    let outcome = battle.capture(&mut player, &Id::from("pokeball")).unwrap();
    assert_eq!(outcome.result, None);
    assert!(!outcome.capture.unwrap().success);
    assert_eq!(outcome.attacks.len(), 1);
    assert_new_logs_eq(
        &mut battle,
        &[
            "capture|Lotus|Poké Ball|fail",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
        ],
    );
    assert_eq!(player.team().len(), 1);
    assert_eq!(player.inventory().count(&Id::from("pokeball")), 4);
    assert_eq!(player.lead().unwrap().hp(), 16);
}

#[test]
fn weakened_target_is_easier_to_capture() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_lotus_battle(&data, &mut player);
    battle.fight(&mut player, 1).unwrap();
    battle.fight(&mut player, 1).unwrap();
    assert_eq!(battle.opponent().active_creature().hp(), 6);

    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, unit_draw(0.98))]);
    let outcome = battle.capture(&mut player, &Id::from("pokeball")).unwrap();
    let capture = outcome.capture.unwrap();
    assert_eq!(capture.modifiers.hp_modifier, 1.5);
    assert_eq!(capture.modifiers.final_rate(), MAX_CAPTURE_RATE);
    assert!(capture.success);
    assert_eq!(outcome.result, Some(BattleResult::Captured));
}

#[test]
fn rejected_captures_do_not_consume_items() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle = start_lotus_battle(&data, &mut player);

    assert_rejection(
        battle.capture(&mut player, &Id::from("potion")),
        BattleRejection::WrongItemKind(Id::from("potion")),
    );
    assert_rejection(
        battle.capture(&mut player, &Id::from("ultraball")),
        BattleRejection::ItemNotInInventory(Id::from("ultraball")),
    );
    assert_eq!(player.inventory().count(&Id::from("potion")), 3);
    assert_eq!(battle.result(), None);
    assert!(battle.log_mut().read_out().next().is_none());
}

#[test]
fn full_team_cannot_capture() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(
        &data,
        &[
            ("gnugnu", 5),
            ("lotus", 5),
            ("blossom", 5),
            ("lavaflare", 5),
            ("pyrolynx", 5),
            ("bluepuffball", 5),
        ],
    );
    assert!(player.is_team_full());
    let mut battle = start_lotus_battle(&data, &mut player);

    assert_rejection(
        battle.use_item(&mut player, &Id::from("pokeball")),
        BattleRejection::TeamFull,
    );
    assert_eq!(player.inventory().count(&Id::from("pokeball")), 5);
    assert_eq!(player.team().len(), 6);
}
