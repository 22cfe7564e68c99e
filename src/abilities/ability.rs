//! Special ability records

use serde::{Deserialize, Serialize};

use super::requirements::Requirements;
use crate::items::Damage;

/// Doubles the weapon's threat range
pub const KEEN: &str = "Keen";
/// May hold a stored spell
pub const SPELL_STORING: &str = "Spell Storing";
/// Table entry that grants an extra quantity-exempt draw
pub const BONUS_SPECIAL_ABILITY: &str = "BonusSpecialAbility";

/// Static per-ability data from the ability table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    pub base_name: String,
    pub power: i32,
    pub bonus_equivalent: i32,
}

impl AbilityData {
    pub fn new(base_name: impl Into<String>, power: i32, bonus_equivalent: i32) -> Self {
        Self {
            base_name: base_name.into(),
            power,
            bonus_equivalent,
        }
    }

    /// Placeholder for names missing from the table
    pub fn unknown(name: &str) -> Self {
        Self::new(name, 0, 0)
    }
}

/// A resolved ability that can be attached to an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    /// Family name shared by stronger and weaker variants
    pub base_name: String,
    pub power: i32,
    pub bonus_equivalent: i32,
    #[serde(default)]
    pub attribute_requirements: Requirements,
    #[serde(default)]
    pub damages: Vec<Damage>,
    #[serde(default)]
    pub critical_damages: Vec<Damage>,
}

impl SpecialAbility {
    /// Bare prototype, as handed in by templates
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            base_name: name.clone(),
            name,
            ..Default::default()
        }
    }

    pub fn custom(
        name: impl Into<String>,
        base_name: impl Into<String>,
        power: i32,
        bonus_equivalent: i32,
    ) -> Self {
        Self {
            name: name.into(),
            base_name: base_name.into(),
            power,
            bonus_equivalent,
            ..Default::default()
        }
    }

    pub fn is_stronger_than(&self, other: &SpecialAbility) -> bool {
        self.power > other.power
    }
}
