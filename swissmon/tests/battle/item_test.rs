use swissmon::{
    battle::Battle,
    dex::Dex,
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
fn potion_heals_lead_mid_battle_without_retaliation() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle =
        Battle::start_wild(&data, &test_options(), &mut player, &Id::from("lotus"), Some(3))
            .unwrap();
    battle.fight(&mut player, 1).unwrap();
    battle.fight(&mut player, 1).unwrap();
    assert_eq!(player.lead().unwrap().max_hp(), 20);
    assert_eq!(player.lead().unwrap().hp(), 12);
    battle.log_mut().read_out().count();

    let outcome = battle.use_item(&mut player, &Id::from("potion")).unwrap();
    assert!(outcome.attacks.is_empty());
    assert_eq!(outcome.result, None);
    let heal = outcome.heal.unwrap();
    assert_eq!(heal.target_name, "Gnugnu");
    assert_eq!(heal.healed, 8);
    assert_new_logs_eq(&mut battle, &["heal|player|Gnugnu|Potion|8"]);
    assert_eq!(player.lead().unwrap().hp(), 20);
    assert_eq!(player.inventory().count(&Id::from("potion")), 2);

    battle.fight(&mut player, 1).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|player|Gnugnu|Lick",
            "damage|opponent|Lotus|5|normal",
            "move|opponent|Lotus|Tackle",
            "damage|player|Gnugnu|4|normal",
        ],
    );
    assert_eq!(battle.opponent().active_creature().hp(), 1);
    assert_eq!(player.lead().unwrap().hp(), 16);
}

#[test]
fn items_not_held_or_unknown_are_rejected_in_battle() {
    let data = LocalDataStore::builtin().unwrap();
    let mut player = player_with_team(&data, &[("gnugnu", 5)]);
    let mut battle =
        Battle::start_wild(&data, &test_options(), &mut player, &Id::from("lotus"), Some(3))
            .unwrap();
    battle.log_mut().read_out().count();

    assert_rejection(
        battle.use_item(&mut player, &Id::from("superpotion")),
        BattleRejection::ItemNotInInventory(Id::from("superpotion")),
    );
    assert_error_message(
        battle.use_item(&mut player, &Id::from("elixir")),
        "item elixir not found",
    );
    assert!(battle.log_mut().read_out().next().is_none());
}

#[test]
fn shop_and_field_healing() {
    let data = LocalDataStore::builtin().unwrap();
    let dex = Dex::new(&data);
    let mut player = player_with_team(&data, &[("gnugnu", 30), ("lotus", 5)]);
    let lead_max_hp = player.lead().unwrap().max_hp();
    player.lead_mut().unwrap().take_damage(60);

    player
        .inventory_mut()
        .buy_item(&dex, &Id::from("superpotion"))
        .unwrap();
    assert_eq!(player.inventory().money(), 2300);
    assert_eq!(
        player
            .use_item_on(&dex, &Id::from("superpotion"), 0)
            .unwrap(),
        50
    );
    assert_eq!(player.lead().unwrap().hp(), lead_max_hp - 10);
    assert!(!player.inventory().has_item(&Id::from("superpotion")));

    player
        .inventory_mut()
        .buy_item(&dex, &Id::from("hyperpotion"))
        .unwrap();
    assert_eq!(player.inventory().money(), 1100);
    assert_rejection(
        player
            .inventory_mut()
            .buy_item(&dex, &Id::from("hyperpotion")),
        BattleRejection::InsufficientFunds(Id::from("hyperpotion")),
    );
    assert_eq!(
        player
            .use_item_on(&dex, &Id::from("hyperpotion"), 0)
            .unwrap(),
        10
    );
    assert_eq!(player.lead().unwrap().hp(), lead_max_hp);

    assert_rejection(
        player.use_item_on(&dex, &Id::from("pokeball"), 1),
        BattleRejection::WrongItemKind(Id::from("pokeball")),
    );
    assert_rejection(
        player.use_item_on(&dex, &Id::from("potion"), 2),
        BattleRejection::InvalidTeamSlot(2),
    );

    let second = player.creature_mut(1).unwrap();
    second.take_damage(u32::MAX);
    assert!(second.is_fainted());
    assert_rejection(
        player.use_item_on(&dex, &Id::from("potion"), 1),
        BattleRejection::CreatureFainted,
    );
    assert_eq!(player.inventory().count(&Id::from("potion")), 3);
    player.heal_team();
    assert!(player.team().iter().all(|creature| creature.hp() == creature.max_hp()));
}
