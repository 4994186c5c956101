mod learnset;
mod nature;
mod species_data;
mod stat;
mod r#type;

pub use learnset::LearnSet;
pub use nature::Nature;
pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
