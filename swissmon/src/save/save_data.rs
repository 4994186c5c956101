use std::collections::{
    BTreeMap,
    BTreeSet,
};

use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};
use swissmon_data::{
    Id,
    Nature,
};

use crate::{
    error::WrapResultError,
    mons::Status,
};

/// Saved state of a single creature.
///
/// Stats are not saved, since they are derived from the species, level and nature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureData {
    pub species: Id,
    pub level: u8,
    pub nature: Nature,
    pub hp: u16,
    pub experience: u32,
    pub moves: Vec<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Saved state of an inventory.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryData {
    #[serde(default)]
    pub items: BTreeMap<Id, u32>,
    #[serde(default)]
    pub money: u32,
}

/// Everything persisted about the player between sessions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub team: Vec<CreatureData>,
    #[serde(default)]
    pub inventory: InventoryData,
    #[serde(default)]
    pub bestiary: BTreeSet<Id>,
    #[serde(default)]
    pub defeated_trainers: BTreeSet<Id>,
}

impl SaveData {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).wrap_error_with_message("failed to parse save data")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_error_with_message("failed to serialize save data")
    }
}
