use std::collections::BTreeMap;

use anyhow::Result;
use swissmon_data::Id;

use crate::{
    dex::Dex,
    error::{
        BattleRejection,
        rejection,
    },
    save::InventoryData,
};

/// Items and currency carried by the player.
///
/// Items with a count of zero are not stored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<Id, u32>,
    money: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The inventory a new game starts with.
    pub fn starter() -> Self {
        let mut inventory = Self::new();
        inventory.add_item(Id::from("pokeball"), 5);
        inventory.add_item(Id::from("potion"), 3);
        inventory.add_money(3000);
        inventory
    }

    pub fn from_data(data: &InventoryData) -> Self {
        let mut inventory = Self::new();
        for (id, count) in &data.items {
            inventory.add_item(id.clone(), *count);
        }
        inventory.money = data.money;
        inventory
    }

    pub fn to_data(&self) -> InventoryData {
        InventoryData {
            items: self.items.clone(),
            money: self.money,
        }
    }

    pub fn count(&self, id: &Id) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    pub fn has_item(&self, id: &Id) -> bool {
        self.count(id) > 0
    }

    /// Every held item with its count, sorted by ID.
    pub fn items(&self) -> impl Iterator<Item = (&Id, u32)> {
        self.items.iter().map(|(id, count)| (id, *count))
    }

    pub fn add_item(&mut self, id: Id, count: u32) {
        if count == 0 {
            return;
        }
        let entry = self.items.entry(id).or_default();
        *entry = entry.saturating_add(count);
    }

    /// Consumes one unit of an item.
    pub fn use_item(&mut self, id: &Id) -> Result<()> {
        let Some(count) = self.items.get_mut(id) else {
            return Err(rejection(BattleRejection::ItemNotInInventory(id.clone())));
        };
        *count -= 1;
        if *count == 0 {
            self.items.remove(id);
        }
        Ok(())
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn add_money(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Buys one unit of an item at its listed price.
    pub fn buy_item(&mut self, dex: &Dex, id: &Id) -> Result<()> {
        let item = dex.item(id)?;
        if self.money < item.price {
            return Err(rejection(BattleRejection::InsufficientFunds(id.clone())));
        }
        self.money -= item.price;
        self.add_item(id.clone(), 1);
        log::debug!("bought {} for {}", item.name, item.price);
        Ok(())
    }
}
