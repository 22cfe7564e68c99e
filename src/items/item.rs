//! Item definitions
//!
//! Core item records shared by every generator: the item itself, its magic
//! block, damage entries and power tiers.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::abilities::SpecialAbility;

/// Capability tags carried in [`Item::attributes`]
pub mod attributes {
    pub const MELEE: &str = "Melee";
    pub const RANGED: &str = "Ranged";
    pub const SHIELD: &str = "Shield";
    pub const ARMOR: &str = "Armor";
    pub const THROWN: &str = "Thrown";
    pub const DOUBLE: &str = "Double";
    pub const SLASHING: &str = "Slashing";
    pub const PIERCING: &str = "Piercing";
    pub const BLUDGEONING: &str = "Bludgeoning";
    pub const METAL: &str = "Metal";
}

/// Item type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    AlchemicalItem,
    Armor,
    Potion,
    Ring,
    Rod,
    Scroll,
    Staff,
    Tool,
    Wand,
    Weapon,
    WondrousItem,
}

impl ItemType {
    /// Tag used when building table names
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::AlchemicalItem => "AlchemicalItem",
            ItemType::Armor => "Armor",
            ItemType::Potion => "Potion",
            ItemType::Ring => "Ring",
            ItemType::Rod => "Rod",
            ItemType::Scroll => "Scroll",
            ItemType::Staff => "Staff",
            ItemType::Tool => "Tool",
            ItemType::Wand => "Wand",
            ItemType::Weapon => "Weapon",
            ItemType::WondrousItem => "WondrousItem",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power tier of a generated item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerTier {
    Mundane,
    #[default]
    Minor,
    Medium,
    Major,
}

impl PowerTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerTier::Mundane => "Mundane",
            PowerTier::Minor => "Minor",
            PowerTier::Medium => "Medium",
            PowerTier::Major => "Major",
        }
    }

    /// Parse a tier name, case-insensitive
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mundane" => Some(PowerTier::Mundane),
            "minor" => Some(PowerTier::Minor),
            "medium" => Some(PowerTier::Medium),
            "major" => Some(PowerTier::Major),
            _ => None,
        }
    }
}

impl fmt::Display for PowerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One damage entry: dice roll, damage type and an optional condition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    pub roll: String,
    /// Empty means "same type as the weapon head it lands on"
    #[serde(default)]
    pub damage_type: String,
    #[serde(default)]
    pub condition: String,
}

impl Damage {
    pub fn new(roll: impl Into<String>, damage_type: impl Into<String>) -> Self {
        Self {
            roll: roll.into(),
            damage_type: damage_type.into(),
            condition: String::new(),
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Copy of this entry with an empty type replaced by `default_type`
    pub fn typed_or(&self, default_type: &str) -> Damage {
        let mut damage = self.clone();
        if damage.damage_type.is_empty() {
            damage.damage_type = default_type.to_string();
        }
        damage
    }

    /// Short display form, e.g. `1d6 fire (against evil)`
    pub fn description(&self) -> String {
        let mut text = self.roll.clone();
        if !self.damage_type.is_empty() {
            text.push(' ');
            text.push_str(&self.damage_type.to_lowercase());
        }
        if !self.condition.is_empty() {
            text.push_str(&format!(" ({})", self.condition));
        }
        text
    }
}

/// Magical properties of an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Magic {
    /// Enhancement bonus, 0 when not magical
    pub bonus: i32,
    pub special_abilities: Vec<SpecialAbility>,
}

/// Any generatable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub item_type: ItemType,
    pub attributes: BTreeSet<String>,
    pub magic: Magic,
    /// Embedded extras such as a stored spell
    pub contents: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            attributes: BTreeSet::new(),
            magic: Magic::default(),
            contents: Vec::new(),
        }
    }

    /// Builder-style attribute list
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.magic.bonus = bonus;
        self
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Display name with bonus and ability names, e.g. `+2 Flaming Keen longsword`
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if self.magic.bonus > 0 {
            parts.push(format!("+{}", self.magic.bonus));
        }
        parts.extend(self.magic.special_abilities.iter().map(|a| a.name.clone()));
        parts.push(self.name.clone());
        parts.join(" ")
    }
}
