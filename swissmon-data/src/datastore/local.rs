use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TrainerData,
    TypeChart,
};

const BUILTIN_TYPE_CHART: &str = include_str!("../../data/type-chart.json");
const BUILTIN_SPECIES: &str = include_str!("../../data/species.json");
const BUILTIN_MOVES: &str = include_str!("../../data/moves.json");
const BUILTIN_ITEMS: &str = include_str!("../../data/items.json");
const BUILTIN_TRAINERS: &str = include_str!("../../data/trainers.json");

/// An implementation of [`DataStore`] that holds all data in memory.
///
/// Data is read once, either from JSON files on disk or from the copies embedded in this crate.
#[derive(Debug, Default, Clone)]
pub struct LocalDataStore {
    pub type_chart: TypeChart,
    pub items: HashMap<Id, ItemData>,
    pub moves: HashMap<Id, MoveData>,
    pub species: HashMap<Id, SpeciesData>,
    pub trainers: HashMap<Id, TrainerData>,
}

impl LocalDataStore {
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Species file name.
    pub const SPECIES_FILE: &str = "species.json";
    /// Moves file name.
    pub const MOVES_FILE: &str = "moves.json";
    /// Items file name.
    pub const ITEMS_FILE: &str = "items.json";
    /// Trainers file name.
    pub const TRAINERS_FILE: &str = "trainers.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or any file cannot be
    /// parsed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        Ok(Self {
            type_chart: read_file(root.join(Self::TYPE_CHART_FILE), "type chart")?,
            items: read_table(root.join(Self::ITEMS_FILE), "items")?,
            moves: read_table(root.join(Self::MOVES_FILE), "moves")?,
            species: read_table(root.join(Self::SPECIES_FILE), "species")?,
            trainers: read_table(root.join(Self::TRAINERS_FILE), "trainers")?,
        })
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] from the game data embedded in this crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            type_chart: serde_json::from_str(BUILTIN_TYPE_CHART)
                .context("failed to parse built-in type chart")?,
            items: parse_table(BUILTIN_ITEMS).context("failed to parse built-in items")?,
            moves: parse_table(BUILTIN_MOVES).context("failed to parse built-in moves")?,
            species: parse_table(BUILTIN_SPECIES).context("failed to parse built-in species")?,
            trainers: parse_table(BUILTIN_TRAINERS).context("failed to parse built-in trainers")?,
        })
    }
}

fn read_file<T: DeserializeOwned>(path: PathBuf, name: &str) -> Result<T> {
    let path_name = path.to_string_lossy().to_string();
    serde_json::from_reader(
        File::open(path).context(format!("failed to read {name} from {path_name}"))?,
    )
    .context(format!("failed to parse {name} from {path_name}"))
}

fn read_table<T: DeserializeOwned>(path: PathBuf, name: &str) -> Result<HashMap<Id, T>> {
    let table: HashMap<String, T> = read_file(path, name)?;
    Ok(key_by_id(table))
}

fn parse_table<T: DeserializeOwned>(json: &str) -> Result<HashMap<Id, T>> {
    let table: HashMap<String, T> = serde_json::from_str(json)?;
    Ok(key_by_id(table))
}

fn key_by_id<T>(table: HashMap<String, T>) -> HashMap<Id, T> {
    table
        .into_iter()
        .map(|(key, value)| (Id::from(key), value))
        .collect()
}

impl DataStore for LocalDataStore {
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>> {
        let mut species_ids = self
            .species
            .iter()
            .filter(|(_, species)| filter(species))
            .map(|(id, _)| id.clone())
            .collect::<Vec<_>>();
        species_ids.sort();
        Ok(species_ids)
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_item(&self, id: &Id) -> Result<Option<ItemData>> {
        Ok(self.items.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }

    fn get_trainer(&self, id: &Id) -> Result<Option<TrainerData>> {
        Ok(self.trainers.get(id).cloned())
    }
}
