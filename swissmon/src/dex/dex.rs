use anyhow::Result;
use swissmon_data::{
    DataStore,
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TrainerData,
    TypeChart,
};

use crate::error::WrapOptionError;

/// Lookup over static game data, backed by a [`DataStore`].
///
/// Unlike the raw [`DataStore`], every lookup through the dex fails with a
/// [`NotFoundError`][`crate::error::NotFoundError`] when the resource does not exist.
#[derive(Clone, Copy)]
pub struct Dex<'d> {
    data: &'d dyn DataStore,
}

impl<'d> Dex<'d> {
    /// Creates a new [`Dex`], backed by the given [`DataStore`].
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self { data }
    }

    /// The underlying data store.
    pub fn data(&self) -> &'d dyn DataStore {
        self.data
    }

    pub fn type_chart(&self) -> Result<TypeChart> {
        self.data.get_type_chart()
    }

    pub fn species(&self, id: &Id) -> Result<SpeciesData> {
        self.data
            .get_species(id)?
            .wrap_not_found_error_with_format(format_args!("species {id}"))
    }

    pub fn move_data(&self, id: &Id) -> Result<MoveData> {
        self.data
            .get_move(id)?
            .wrap_not_found_error_with_format(format_args!("move {id}"))
    }

    pub fn item(&self, id: &Id) -> Result<ItemData> {
        self.data
            .get_item(id)?
            .wrap_not_found_error_with_format(format_args!("item {id}"))
    }

    pub fn trainer(&self, id: &Id) -> Result<TrainerData> {
        self.data
            .get_trainer(id)?
            .wrap_not_found_error_with_format(format_args!("trainer {id}"))
    }

    /// All species that can appear in the wild, sorted by ID.
    pub fn all_species(&self) -> Result<Vec<Id>> {
        self.data.all_species_ids(&|_| true)
    }
}
