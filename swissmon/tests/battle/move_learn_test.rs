use swissmon::{
    battle::{
        Battle,
        BattleResult,
        BattleState,
        MoveLearnDecision,
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
};

fn ids(ids: &[&str]) -> Vec<Id> {
    ids.iter().map(|id| Id::from(*id)).collect()
}

/// A level 15 Gnugnu with four moves, 50 experience short of level 16, where it learns Psybeam.
fn player_about_to_learn_psybeam(data: &LocalDataStore) -> Player {
    let mut player = player_with_team(data, &[("gnugnu", 15)]);
    let lead = player.lead_mut().unwrap();
    assert_eq!(
        lead.moves(),
        ids(&["scratch", "lick", "confusion", "shadowsneak"])
    );
    assert!(!lead.gain_experience(3325).leveled_up());
    player
}

#[test]
fn wild_victory_waits_for_move_decision() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_about_to_learn_psybeam(&data);
    let mut battle = Battle::start_wild(
        &data,
        &test_options(),
        &mut player,
        &Id::from("lavaflare"),
        Some(3),
    )
    .unwrap();
    battle.log_mut().read_out().count();

    let outcome = battle.fight(&mut player, 3).unwrap();
    assert_eq!(outcome.result, None);
    assert!(outcome.leveled_up());
    assert_eq!(outcome.pending_move, Some(Id::from("psybeam")));
    assert_eq!(
        battle.state(),
        &BattleState::PendingMoveLearn {
            move_id: Id::from("psybeam"),
        }
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Shadow Sneak",
            "damage|opponent|LavaFlare|18|normal",
            "faint|opponent|LavaFlare",
            "exp|player|Gnugnu|85",
            "levelup|player|Gnugnu|16",
            "pendingmove|player|Gnugnu|Psybeam",
        ],
    );
    let lead = player.lead().unwrap();
    assert_eq!(lead.level(), 16);
    assert_eq!(lead.experience(), 35);
    assert_eq!(lead.hp(), 42);
    assert_eq!(
        lead.moves(),
        ids(&["scratch", "lick", "confusion", "shadowsneak"])
    );

    assert_rejection(battle.fight(&mut player, 0), BattleRejection::MoveLearnPending);
    assert_rejection(battle.flee(), BattleRejection::MoveLearnPending);
    assert_rejection(
        battle.decide_move_learn(&mut player, MoveLearnDecision::Replace(4)),
        BattleRejection::InvalidMoveSlot(4),
    );
    assert_eq!(battle.pending_move(), Some(&Id::from("psybeam")));

    let outcome = battle
        .decide_move_learn(&mut player, MoveLearnDecision::Replace(0))
        .unwrap();
    assert_eq!(outcome.result, Some(BattleResult::Won));
    assert_new_logs_eq(
        &mut battle,
        &[
            "forgetmove|player|Gnugnu|Scratch",
            "learnmove|player|Gnugnu|Psybeam",
            "win",
        ],
    );
    assert_eq!(
        player.lead().unwrap().moves(),
        ids(&["psybeam", "lick", "confusion", "shadowsneak"])
    );
}

#[test]
fn declining_move_continues_trainer_battle() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_about_to_learn_psybeam(&data);
    player
        .lead_mut()
        .unwrap()
        .learn_move(Id::from("hyperbeam"), Some(0))
        .unwrap();
    let mut battle =
        Battle::start_trainer(&data, &test_options(), &mut player, &Id::from("trainer1")).unwrap();
    battle.log_mut().read_out().count();

    // Hyper Beam has 90% accuracy, so force both attacks to hit.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, 0), (3, 0)]);

    let outcome = battle.fight(&mut player, 0).unwrap();
    assert_eq!(outcome.pending_move, Some(Id::from("psybeam")));
    assert_eq!(outcome.next_opponent, None);
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Hyper Beam",
            "damage|opponent|Blue Puffball|53|normal",
            "faint|opponent|Blue Puffball",
            "exp|player|Gnugnu|64",
            "levelup|player|Gnugnu|16",
            "pendingmove|player|Gnugnu|Psybeam",
        ],
    );

    let outcome = battle
        .decide_move_learn(&mut player, MoveLearnDecision::Decline)
        .unwrap();
    assert_eq!(outcome.next_opponent.as_deref(), Some("Lotus"));
    assert_eq!(outcome.result, None);
    assert_eq!(battle.state(), &BattleState::PlayerTurn);
    assert_new_logs_eq(
        &mut battle,
        &[
            "declinemove|player|Gnugnu|Psybeam",
            "switch|opponent|Lotus|6",
        ],
    );
    assert!(!player.lead().unwrap().knows_move(&Id::from("psybeam")));

    let outcome = battle.fight(&mut player, 0).unwrap();
    assert_eq!(outcome.result, Some(BattleResult::Won));
    assert_eq!(outcome.reward, Some(500));
    assert!(!outcome.leveled_up());
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Hyper Beam",
            "damage|opponent|Lotus|47|normal",
            "faint|opponent|Lotus",
            "exp|player|Gnugnu|68",
            "reward|500",
            "win",
        ],
    );
}
