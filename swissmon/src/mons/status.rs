use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A persistent status condition.
///
/// Status conditions only affect the odds of capturing a creature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Status {
    #[string = "paralyzed"]
    #[alias = "par"]
    Paralyzed,
    #[string = "asleep"]
    #[alias = "slp"]
    Asleep,
    #[string = "frozen"]
    #[alias = "frz"]
    Frozen,
    #[string = "poisoned"]
    #[alias = "psn"]
    Poisoned,
    #[string = "burned"]
    #[alias = "brn"]
    Burned,
}

impl Status {
    /// Flat bonus added to the capture rate of a creature with this status.
    pub fn capture_bonus(&self) -> f64 {
        match self {
            Self::Paralyzed => 0.15,
            Self::Asleep | Self::Frozen => 0.20,
            Self::Poisoned | Self::Burned => 0.10,
        }
    }
}
