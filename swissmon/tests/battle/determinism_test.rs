use swissmon::{
    battle::{
        Battle,
        BattleEngineOptions,
        DamageRandomization,
    },
    player::Player,
};
use swissmon_data::{
    Id,
    LocalDataStore,
};
use swissmon_test_utils::player_with_team;

fn options(seed: u64) -> BattleEngineOptions {
    BattleEngineOptions {
        seed: Some(seed),
        randomize_damage: DamageRandomization::Randomize,
        ..Default::default()
    }
}

fn play(data: &LocalDataStore, seed: u64) -> (Vec<String>, Player) {
    let mut player = player_with_team(data, &[("gnugnu", 10)]);
    let mut battle =
        Battle::start_wild(data, &options(seed), &mut player, &Id::from("lotus"), None).unwrap();
    assert_eq!(battle.prng_mut().initial_seed(), seed);
    for turn in 0.. {
        if battle.is_finished() {
            break;
        }
        assert!(turn < 100, "battle did not finish");
        battle.fight(&mut player, turn % 2).unwrap();
    }
    let logs = battle.log().logs().map(|log| log.to_owned()).collect();
    (logs, player)
}

#[test]
fn same_seed_produces_same_battle() {
    let data = LocalDataStore::builtin().unwrap();
    let (first_logs, first_player) = play(&data, 7);
    let (second_logs, second_player) = play(&data, 7);
    pretty_assertions::assert_eq!(first_logs, second_logs);
    assert_eq!(first_player, second_player);
    assert!(first_logs[0].starts_with("start|wild|Lotus|"));
    assert!(
        first_logs
            .last()
            .is_some_and(|log| log == "win" || log == "lose")
    );
}

#[test]
fn unseeded_battles_still_finish() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 10)]);
    let mut battle = Battle::start_wild(
        &data,
        &BattleEngineOptions::default(),
        &mut player,
        &Id::from("blossom"),
        None,
    )
    .unwrap();
    let level = battle.opponent().active_creature().level();
    assert!((2..=7).contains(&level), "{level}");
    while !battle.is_finished() {
        battle.fight(&mut player, 0).unwrap();
    }
    assert!(battle.result().is_some());
}
