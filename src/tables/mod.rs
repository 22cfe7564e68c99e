//! Table access
//!
//! The generation engine never reads table content directly. It talks to the
//! collaborator traits declared here, which lets tests script every draw and
//! lets the binary plug in the RON-backed [`TableData`] and [`TableRoller`].

pub mod data;
pub mod defaults;
pub mod loader;
pub mod roller;

#[cfg(test)]
pub(crate) mod stubs;

use crate::abilities::AbilityData;
use crate::items::{Damage, PowerTier};

pub use data::{PercentileEntry, PercentileTable, TableData};
pub use loader::export_default_data;
pub use roller::TableRoller;

/// Table names used by the engine and the generators
pub mod names {
    use crate::items::PowerTier;

    /// Boolean table deciding whether a Spell Storing weapon holds a spell
    pub const SPELL_STORING_CONTAINS_SPELL: &str = "SpellStoringContainsSpell";
    /// Spell types the spell generator picks from
    pub const SPELL_TYPES: &str = "SpellTypes";

    pub fn special_abilities(power: PowerTier, key: &str) -> String {
        format!("{}{}SpecialAbilities", power, key)
    }

    pub fn special_ability_quantity(power: PowerTier) -> String {
        format!("{}SpecialAbilityQuantity", power)
    }

    pub fn weapon_bonus(power: PowerTier) -> String {
        format!("{}WeaponBonus", power)
    }

    pub fn armor_bonus(power: PowerTier) -> String {
        format!("{}ArmorBonus", power)
    }

    pub fn spell_levels(power: PowerTier) -> String {
        format!("{}SpellLevels", power)
    }

    pub fn spells(spell_type: &str, level: u32) -> String {
        format!("{}Level{}Spells", spell_type, level)
    }
}

/// Named table lookups
pub trait TableSelector {
    /// Every entry of a collection table
    fn select_all_from(&mut self, table: &str) -> Vec<String>;

    /// One randomly chosen group from a grouped table
    fn select_one_from(&mut self, table: &str) -> Vec<String>;

    /// Weighted roll on a percentile table
    fn select_percentile(&mut self, table: &str) -> String;

    /// Weighted yes/no decision
    fn select_boolean(&mut self, table: &str) -> bool;
}

/// Uniform random choice
pub trait RandomSource {
    /// One element of `collection`, `None` when it is empty
    fn select_random_from(&mut self, collection: &[String]) -> Option<String>;
}

/// Static ability tables
pub trait AbilityCatalog {
    fn ability_data(&self, name: &str) -> Option<AbilityData>;

    fn is_known(&self, name: &str) -> bool {
        self.ability_data(name).is_some()
    }

    /// Extra damage keyed by ability name
    fn damages(&self, name: &str) -> Vec<Damage>;

    /// Extra critical damage keyed by ability name plus critical multiplier
    fn critical_damages(&self, key: &str) -> Vec<Damage>;

    /// Raw requirement tokens keyed by family name
    fn attribute_requirements(&self, base_name: &str) -> Vec<String>;
}

/// Spell generation
pub trait SpellGenerator {
    fn generate_level(&mut self, power: PowerTier) -> u32;
    fn generate_type(&mut self) -> String;
    fn generate(&mut self, spell_type: &str, level: u32) -> String;
}
