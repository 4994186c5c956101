use serde::{
    Deserialize,
    Serialize,
};

/// What an item does when used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A capture tool, which multiplies the odds of a capture attempt.
    Catch {
        /// Catch bonus multiplier, at least 1.0.
        catch_bonus: f64,
    },
    /// A healing tool, which restores a flat amount of HP.
    Heal {
        /// HP restored.
        heal_amount: u16,
    },
}

/// Data about a particular item.
///
/// Items are held in the player's inventory and can be bought from the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// Effect of the item.
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Shop price.
    pub price: u32,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl ItemData {
    /// The catch bonus of the item, if it is a capture tool.
    pub fn catch_bonus(&self) -> Option<f64> {
        match self.kind {
            ItemKind::Catch { catch_bonus } => Some(catch_bonus),
            _ => None,
        }
    }

    /// The heal amount of the item, if it is a healing tool.
    pub fn heal_amount(&self) -> Option<u16> {
        match self.kind {
            ItemKind::Heal { heal_amount } => Some(heal_amount),
            _ => None,
        }
    }
}
