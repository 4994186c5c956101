mod calculations;
mod creature;
mod status;

pub use calculations::{
    apply_nature_to_stats,
    calculate_stat,
    calculate_stats,
    exp_to_next_level,
};
pub use creature::{
    Creature,
    DEFAULT_LEVEL,
    ExperienceGain,
    FALLBACK_MOVE,
    MAX_LEVEL,
    MAX_MOVES,
};
pub use status::Status;
