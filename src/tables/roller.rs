//! Random table rolls
//!
//! [`TableRoller`] answers table queries from [`TableData`] using any `rand`
//! RNG. Seed it for reproducible items.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::data::TableData;
use super::{names, RandomSource, SpellGenerator, TableSelector};
use crate::items::PowerTier;

/// Rolls on the tables of one [`TableData`]
pub struct TableRoller<'a, R: Rng> {
    data: &'a TableData,
    rng: R,
}

impl<'a> TableRoller<'a, StdRng> {
    /// Roller with a fixed seed, or OS entropy when `seed` is `None`
    pub fn seeded(data: &'a TableData, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(data, rng)
    }
}

impl<'a, R: Rng> TableRoller<'a, R> {
    pub fn new(data: &'a TableData, rng: R) -> Self {
        Self { data, rng }
    }

    fn roll_d100(&mut self) -> u32 {
        self.rng.gen_range(1..=100)
    }
}

impl<R: Rng> TableSelector for TableRoller<'_, R> {
    fn select_all_from(&mut self, table: &str) -> Vec<String> {
        self.data.collection(table).to_vec()
    }

    /// Entries of a grouped table are comma-separated; one is picked at random
    fn select_one_from(&mut self, table: &str) -> Vec<String> {
        match self.data.collection(table).choose(&mut self.rng) {
            Some(group) => group
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
            None => {
                log::warn!("Grouped table {} is empty or missing", table);
                Vec::new()
            }
        }
    }

    fn select_percentile(&mut self, table: &str) -> String {
        let roll = self.roll_d100();
        let data = self.data;
        match data.percentiles.get(table).and_then(|t| t.lookup(roll)) {
            Some(value) => value.to_string(),
            None => {
                log::warn!("No result on percentile table {} for roll {}", table, roll);
                String::new()
            }
        }
    }

    fn select_boolean(&mut self, table: &str) -> bool {
        match self.data.booleans.get(table) {
            Some(&chance) if chance.is_finite() => self.rng.gen_bool(chance.clamp(0.0, 1.0)),
            Some(&chance) => {
                log::warn!("Boolean table {} has unusable chance {}", table, chance);
                false
            }
            None => {
                log::warn!("Boolean table {} is missing", table);
                false
            }
        }
    }
}

impl<R: Rng> RandomSource for TableRoller<'_, R> {
    fn select_random_from(&mut self, collection: &[String]) -> Option<String> {
        collection.choose(&mut self.rng).cloned()
    }
}

impl<R: Rng> SpellGenerator for TableRoller<'_, R> {
    fn generate_level(&mut self, power: PowerTier) -> u32 {
        self.select_percentile(&names::spell_levels(power))
            .parse()
            .unwrap_or(0)
    }

    fn generate_type(&mut self) -> String {
        let types = self.select_all_from(names::SPELL_TYPES);
        self.select_random_from(&types)
            .unwrap_or_else(|| "Arcane".to_string())
    }

    fn generate(&mut self, spell_type: &str, level: u32) -> String {
        self.select_one_from(&names::spells(spell_type, level))
            .into_iter()
            .next()
            .unwrap_or_else(|| format!("level {} {} spell", level, spell_type.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::defaults::default_table_data;
    use crate::tables::PercentileTable;

    #[test]
    fn test_same_seed_same_rolls() {
        let data = default_table_data();
        let mut first = TableRoller::seeded(&data, Some(42));
        let mut second = TableRoller::seeded(&data, Some(42));

        for _ in 0..20 {
            assert_eq!(
                first.select_percentile("MajorWeaponBonus"),
                second.select_percentile("MajorWeaponBonus")
            );
        }
    }

    #[test]
    fn test_percentile_stays_in_table() {
        let mut data = TableData::default();
        data.percentiles
            .insert("Coin".into(), PercentileTable::from_bands(&[(50, "heads"), (100, "tails")]));
        let mut roller = TableRoller::seeded(&data, Some(7));

        for _ in 0..50 {
            let result = roller.select_percentile("Coin");
            assert!(result == "heads" || result == "tails");
        }
        assert_eq!(roller.select_percentile("Missing"), "");
    }

    #[test]
    fn test_boolean_extremes() {
        let mut data = TableData::default();
        data.booleans.insert("Always".into(), 1.0);
        data.booleans.insert("Never".into(), 0.0);
        let mut roller = TableRoller::seeded(&data, Some(1));

        assert!(roller.select_boolean("Always"));
        assert!(!roller.select_boolean("Never"));
        assert!(!roller.select_boolean("Missing"));
    }

    #[test]
    fn test_non_finite_chance_is_false() {
        let mut data = TableData::default();
        data.booleans.insert("Broken".into(), f64::NAN);
        data.booleans.insert("Endless".into(), f64::INFINITY);
        let mut roller = TableRoller::seeded(&data, Some(1));

        assert!(!roller.select_boolean("Broken"));
        assert!(!roller.select_boolean("Endless"));
    }

    #[test]
    fn test_select_one_splits_group() {
        let mut data = TableData::default();
        data.collections
            .insert("Pairs".into(), vec!["Flaming, Keen".to_string()]);
        let mut roller = TableRoller::seeded(&data, Some(3));

        assert_eq!(roller.select_one_from("Pairs"), vec!["Flaming", "Keen"]);
    }

    #[test]
    fn test_spell_generation() {
        let data = default_table_data();
        let mut roller = TableRoller::seeded(&data, Some(11));

        let level = roller.generate_level(PowerTier::Minor);
        assert!(level <= 3);

        let spell_type = roller.generate_type();
        assert!(spell_type == "Arcane" || spell_type == "Divine");

        let spell = roller.generate(&spell_type, level);
        assert!(data.collection(&names::spells(&spell_type, level)).contains(&spell));
    }
}
