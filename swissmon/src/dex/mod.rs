mod dex;

pub use dex::Dex;
pub use swissmon_data::DataStore;
