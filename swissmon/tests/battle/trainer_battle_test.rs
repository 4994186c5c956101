use swissmon::{
    battle::{
        Battle,
        BattleResult,
        Opponent,
    },
    error::BattleRejection,
};
use swissmon_data::{
    Id,
    LocalDataStore,
};
use swissmon_test_utils::{
    assert_error_message,
    assert_new_logs_eq,
    assert_rejection,
    player_with_team,
    test_options,
};

#[test]
fn defeats_trainer_team_in_order_and_collects_reward() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 30)]);
    let mut battle =
        Battle::start_trainer(&data, &test_options(), &mut player, &Id::from("trainer1")).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "start|trainer|Trainer Red",
            "dialogue|Trainer Red|Do you want to battle me?",
            "switch|opponent|Blue Puffball|5",
            "switch|player|Gnugnu|30",
        ],
    );

    let outcome = battle.fight(&mut player, 3).unwrap();
    assert_eq!(outcome.result, None);
    assert_eq!(outcome.next_opponent.as_deref(), Some("Lotus"));
    assert_eq!(outcome.attacks.len(), 1);
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Shadow Ball",
            "damage|opponent|Blue Puffball|88|normal",
            "faint|opponent|Blue Puffball",
            "exp|player|Gnugnu|64",
            "switch|opponent|Lotus|6",
        ],
    );
    assert_eq!(player.inventory().money(), 3000);
    assert!(!player.has_defeated(&Id::from("trainer1")));

    let outcome = battle.fight(&mut player, 3).unwrap();
    assert_eq!(outcome.result, Some(BattleResult::Won));
    assert_eq!(outcome.reward, Some(500));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Shadow Ball",
            "damage|opponent|Lotus|70|normal",
            "faint|opponent|Lotus",
            "exp|player|Gnugnu|68",
            "reward|500",
            "win",
        ],
    );

    assert_eq!(battle.reward(), 500);
    assert_eq!(player.inventory().money(), 3500);
    assert!(player.has_defeated(&Id::from("trainer1")));
    assert!(player.bestiary().contains(&Id::from("bluepuffball")));
    assert!(player.bestiary().contains(&Id::from("lotus")));
    assert_eq!(player.lead().unwrap().experience(), 132);
    assert_eq!(player.lead().unwrap().hp(), player.lead().unwrap().max_hp());

    assert_rejection(
        Battle::start_trainer(&data, &test_options(), &mut player, &Id::from("trainer1")),
        BattleRejection::TrainerAlreadyDefeated(Id::from("trainer1")),
    );
}

#[test]
fn trainer_battle_rejects_capture_and_flee() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle =
        Battle::start_trainer(&data, &test_options(), &mut player, &Id::from("trainer2")).unwrap();
    assert!(matches!(battle.opponent(), Opponent::Trainer { .. }));
    assert_eq!(battle.opponent().remaining(), 0);

    assert_rejection(battle.flee(), BattleRejection::FleeFromTrainer);
    assert_rejection(
        battle.capture(&mut player, &Id::from("pokeball")),
        BattleRejection::CaptureFromTrainer,
    );
    assert_rejection(
        battle.use_item(&mut player, &Id::from("pokeball")),
        BattleRejection::CaptureFromTrainer,
    );
    assert_eq!(player.inventory().count(&Id::from("pokeball")), 5);
    assert_eq!(battle.result(), None);
}

#[test]
fn unknown_trainer_is_not_found() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    assert_error_message(
        Battle::start_trainer(&data, &test_options(), &mut player, &Id::from("trainer9")),
        "trainer trainer9 not found",
    );
}
