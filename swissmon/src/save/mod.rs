mod save_data;

pub use save_data::{
    CreatureData,
    InventoryData,
    SaveData,
};
