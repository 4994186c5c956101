use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A creature's nature, which scales its Attack, Defense and Speed.
///
/// HP is never affected by a nature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    Hardy,
    #[string = "Brave"]
    Brave,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Bold"]
    Bold,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Quiet"]
    Quiet,
    #[string = "Rash"]
    Rash,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Sassy"]
    Sassy,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
}

impl Nature {
    /// Every nature, in the order used for random selection.
    pub const ALL: [Nature; 21] = [
        Self::Hardy,
        Self::Brave,
        Self::Adamant,
        Self::Naughty,
        Self::Bold,
        Self::Relaxed,
        Self::Impish,
        Self::Lax,
        Self::Timid,
        Self::Hasty,
        Self::Jolly,
        Self::Naive,
        Self::Modest,
        Self::Mild,
        Self::Quiet,
        Self::Rash,
        Self::Calm,
        Self::Gentle,
        Self::Sassy,
        Self::Careful,
        Self::Quirky,
    ];

    /// The (Attack, Defense, Speed) multipliers of the nature.
    fn modifiers(&self) -> (f64, f64, f64) {
        match self {
            Self::Hardy | Self::Quirky => (1.0, 1.0, 1.0),
            Self::Brave => (1.1, 1.0, 0.9),
            Self::Adamant => (1.1, 0.9, 1.0),
            Self::Naughty => (1.1, 1.0, 1.0),
            Self::Bold => (0.9, 1.1, 1.0),
            Self::Relaxed | Self::Sassy => (1.0, 1.1, 0.9),
            Self::Impish | Self::Lax | Self::Calm | Self::Careful => (1.0, 1.1, 1.0),
            Self::Timid => (0.9, 1.0, 1.1),
            Self::Hasty => (1.0, 0.9, 1.1),
            Self::Jolly | Self::Naive => (1.0, 1.0, 1.1),
            Self::Modest => (0.9, 1.0, 1.0),
            Self::Mild | Self::Rash => (1.0, 0.9, 1.0),
            Self::Quiet => (1.0, 1.0, 0.9),
            Self::Gentle => (0.9, 1.1, 1.0),
        }
    }

    /// The multiplier applied to the given stat.
    pub fn modifier(&self, stat: Stat) -> f64 {
        let (atk, def, spe) = self.modifiers();
        match stat {
            Stat::HP => 1.0,
            Stat::Atk => atk,
            Stat::Def => def,
            Stat::Spe => spe,
        }
    }
}
