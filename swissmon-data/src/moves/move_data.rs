use serde::{
    Deserialize,
    Serialize,
};

use crate::Type;

fn default_accuracy() -> u8 {
    100
}

/// Data about a particular move.
///
/// Every creature knows up to four moves. Each turn, the active creature uses one move against its
/// opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    ///
    /// A base power of 0 marks a status-only move, which never deals damage.
    #[serde(default)]
    pub base_power: u32,
    /// Base accuracy, as a percentage between 1 and 100.
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl MoveData {
    /// Does the move deal damage?
    pub fn is_damaging(&self) -> bool {
        self.base_power > 0
    }
}
