//! Table data
//!
//! Serializable table content. Loaded from RON files, with built-in defaults
//! when no data directory is present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AbilityCatalog;
use crate::abilities::AbilityData;
use crate::items::Damage;

/// One inclusive d100 band of a percentile table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileEntry {
    pub low: u32,
    pub high: u32,
    pub value: String,
}

/// A d100 table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileTable {
    pub entries: Vec<PercentileEntry>,
}

impl PercentileTable {
    /// Build from `(high, value)` pairs; each band starts after the previous one
    pub fn from_bands(bands: &[(u32, &str)]) -> Self {
        let mut low = 1;
        let entries = bands
            .iter()
            .map(|&(high, value)| {
                let entry = PercentileEntry {
                    low,
                    high,
                    value: value.to_string(),
                };
                low = high + 1;
                entry
            })
            .collect();
        Self { entries }
    }

    /// Value for a d100 roll
    pub fn lookup(&self, roll: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| (e.low..=e.high).contains(&roll))
            .map(|e| e.value.as_str())
    }
}

/// All table content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableData {
    /// Ability data by ability name
    pub abilities: BTreeMap<String, AbilityData>,
    /// Extra damage by ability name
    pub damages: BTreeMap<String, Vec<Damage>>,
    /// Extra critical damage by ability name plus critical multiplier
    pub critical_damages: BTreeMap<String, Vec<Damage>>,
    /// Requirement tokens by family name
    pub requirements: BTreeMap<String, Vec<String>>,
    /// Named collections
    pub collections: BTreeMap<String, Vec<String>>,
    pub percentiles: BTreeMap<String, PercentileTable>,
    /// Chance of `true`, 0.0 to 1.0
    pub booleans: BTreeMap<String, f64>,
}

impl TableData {
    pub fn add_ability(&mut self, name: &str, data: AbilityData) {
        self.abilities.insert(name.to_string(), data);
    }

    pub fn collection(&self, table: &str) -> &[String] {
        self.collections.get(table).map(Vec::as_slice).unwrap_or_default()
    }
}

impl AbilityCatalog for TableData {
    fn ability_data(&self, name: &str) -> Option<AbilityData> {
        self.abilities.get(name).cloned()
    }

    fn is_known(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    fn damages(&self, name: &str) -> Vec<Damage> {
        self.damages.get(name).cloned().unwrap_or_default()
    }

    fn critical_damages(&self, key: &str) -> Vec<Damage> {
        self.critical_damages.get(key).cloned().unwrap_or_default()
    }

    fn attribute_requirements(&self, base_name: &str) -> Vec<String> {
        self.requirements.get(base_name).cloned().unwrap_or_default()
    }
}
