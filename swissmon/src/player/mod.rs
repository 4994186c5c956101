mod inventory;
mod player;

pub use inventory::Inventory;
pub use player::{
    Player,
    STARTER_SPECIES,
};
