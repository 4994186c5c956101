use serde::{
    Deserialize,
    Serialize,
};

use crate::Id;

/// A single creature on a trainer's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerTeamMember {
    pub species: Id,
    pub level: u8,
}

/// Data about a trainer that can be challenged in the world.
///
/// A trainer's creatures battle one after another, in team order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerData {
    /// Display name of the trainer.
    pub name: String,
    /// Line spoken when the battle starts.
    #[serde(default)]
    pub dialogue: String,
    /// Team, in battle order.
    pub team: Vec<TrainerTeamMember>,
    /// Currency paid to the player when the trainer is defeated.
    #[serde(default)]
    pub reward: u32,
}
