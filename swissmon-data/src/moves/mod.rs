mod move_data;

pub use move_data::MoveData;
