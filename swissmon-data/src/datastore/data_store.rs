use anyhow::Result;

use crate::{
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TrainerData,
    TypeChart,
};

/// Collection of tables for all static game data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// This collection is used for "raw lookup" of resources by ID. A missing resource is reported as
/// `Ok(None)`; errors are reserved for failures of the underlying source.
pub trait DataStore: Send + Sync {
    /// Gets all species IDs, applying the given filter on the underlying data.
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>>;

    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;

    /// Gets an item by ID.
    fn get_item(&self, id: &Id) -> Result<Option<ItemData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
    /// Gets a trainer by ID.
    fn get_trainer(&self, id: &Id) -> Result<Option<TrainerData>>;
}
