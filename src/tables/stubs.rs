//! Scripted collaborators for tests

use std::collections::{BTreeMap, VecDeque};

use super::{RandomSource, SpellGenerator, TableSelector};
use crate::items::PowerTier;

/// Table collaborator that replays scripted answers and counts every call
#[derive(Debug, Default)]
pub(crate) struct ScriptedTables {
    pub collections: BTreeMap<String, Vec<String>>,
    pub percentiles: BTreeMap<String, VecDeque<String>>,
    pub booleans: VecDeque<bool>,
    /// Names returned by random picks, in order
    pub picks: VecDeque<String>,
    pub spell_levels: VecDeque<u32>,
    pub spells: VecDeque<String>,
    pub table_calls: usize,
    pub random_calls: usize,
}

impl ScriptedTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, table: &str, entries: &[&str]) -> Self {
        self.collections
            .insert(table.to_string(), entries.iter().map(|e| e.to_string()).collect());
        self
    }

    pub fn with_percentiles(mut self, table: &str, results: &[&str]) -> Self {
        self.percentiles
            .entry(table.to_string())
            .or_default()
            .extend(results.iter().map(|r| r.to_string()));
        self
    }

    pub fn with_picks(mut self, picks: &[&str]) -> Self {
        self.picks.extend(picks.iter().map(|p| p.to_string()));
        self
    }

    pub fn with_booleans(mut self, booleans: &[bool]) -> Self {
        self.booleans.extend(booleans.iter().copied());
        self
    }

    pub fn with_spell(mut self, level: u32, spell: &str) -> Self {
        self.spell_levels.push_back(level);
        self.spells.push_back(spell.to_string());
        self
    }

    pub fn total_calls(&self) -> usize {
        self.table_calls + self.random_calls
    }
}

impl TableSelector for ScriptedTables {
    fn select_all_from(&mut self, table: &str) -> Vec<String> {
        self.table_calls += 1;
        self.collections.get(table).cloned().unwrap_or_default()
    }

    fn select_one_from(&mut self, table: &str) -> Vec<String> {
        self.table_calls += 1;
        self.collections.get(table).cloned().unwrap_or_default()
    }

    fn select_percentile(&mut self, table: &str) -> String {
        self.table_calls += 1;
        self.percentiles
            .get_mut(table)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default()
    }

    fn select_boolean(&mut self, _table: &str) -> bool {
        self.table_calls += 1;
        self.booleans.pop_front().unwrap_or(false)
    }
}

impl RandomSource for ScriptedTables {
    /// Next scripted name when the collection holds it, else the first element
    fn select_random_from(&mut self, collection: &[String]) -> Option<String> {
        self.random_calls += 1;
        if let Some(position) = self
            .picks
            .iter()
            .position(|pick| collection.contains(pick))
        {
            return self.picks.remove(position);
        }
        collection.first().cloned()
    }
}

impl SpellGenerator for ScriptedTables {
    fn generate_level(&mut self, _power: PowerTier) -> u32 {
        self.spell_levels.pop_front().unwrap_or(1)
    }

    fn generate_type(&mut self) -> String {
        "Arcane".to_string()
    }

    fn generate(&mut self, _spell_type: &str, _level: u32) -> String {
        self.spells.pop_front().unwrap_or_else(|| "magic missile".to_string())
    }
}
