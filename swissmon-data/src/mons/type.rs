use std::fmt;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
    de::{
        Unexpected,
        Visitor,
    },
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The element type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Ice"]
    Ice,
    #[string = "Fighting"]
    Fighting,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Flying"]
    Flying,
    #[string = "Psychic"]
    Psychic,
    #[string = "Bug"]
    Bug,
    #[string = "Rock"]
    Rock,
    #[string = "Ghost"]
    Ghost,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Steel"]
    Steel,
    #[string = "Fairy"]
    Fairy,
}

/// Type effectiveness of one type against another, as listed in the [`TypeChart`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier of a single chart entry.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0f64,
            Self::Weak => 0.5,
            Self::Normal => 1f64,
            Self::Strong => 2f64,
        }
    }
}

impl TryFrom<f64> for TypeEffectiveness {
    type Error = ();

    /// Only the exact multipliers of a single chart entry are accepted.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0f64 {
            Ok(Self::None)
        } else if value == 0.5 {
            Ok(Self::Weak)
        } else if value == 1f64 {
            Ok(Self::Normal)
        } else if value == 2f64 {
            Ok(Self::Strong)
        } else {
            Err(())
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f64(self.multiplier()),
            _ => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v as f64).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v as f64)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v).map_err(|_| E::invalid_value(Unexpected::Float(v), &self))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f64(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The chart is sparse: any pair not listed has normal effectiveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// Effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }

    /// Damage multiplier of an attacking type against every type of a defender.
    ///
    /// The multiplier is the product of every individual lookup, so a 2x and a 0.5x entry cancel
    /// out and any 0x entry zeroes the whole product.
    pub fn multiplier(&self, attacking: Type, defending: &[Type]) -> f64 {
        defending
            .iter()
            .map(|defending| self.effectiveness(attacking, *defending).multiplier())
            .product()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}
