//! Special ability selection
//!
//! Draws abilities from the power/attribute keyed tables until the requested
//! quantity is reached, the candidate pool runs dry, or nothing else fits in
//! the bonus budget. Weaker variants of an ability family are upgraded in
//! place and never downgraded.

use super::ability::{SpecialAbility, BONUS_SPECIAL_ABILITY};
use super::resolver::{critical_suffix, resolve};
use crate::items::{attributes, Item, PowerTier, Weapon};
use crate::tables::{names, AbilityCatalog, RandomSource, TableSelector};

/// Cap on the item's bonus plus every selected ability's bonus equivalent
pub const MAX_TOTAL_BONUS: i32 = 10;

/// One draw from the candidate pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    Candidate(String),
    /// Grants one extra pass that does not count against the quantity
    BonusUpgrade,
}

/// What happened to a resolved candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offer {
    Added,
    Upgraded { replaced: String },
    /// Same family already holds an equal or stronger variant
    Kept,
    OverBudget,
}

/// Working state of one selection call
#[derive(Debug, Clone)]
pub struct Accumulator {
    /// One winner per family, in insertion order
    selected: Vec<SpecialAbility>,
    used_bonus: i32,
    available: Vec<String>,
    extra_passes: usize,
}

impl Accumulator {
    pub fn new(magic_bonus: i32, available: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(available.len());
        for name in available {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }

        Self {
            selected: Vec::new(),
            used_bonus: magic_bonus,
            available: unique,
            extra_passes: 0,
        }
    }

    /// Keep drawing while below quantity (plus bonus passes) and the pool has names left
    pub fn wants_more(&self, quantity: usize) -> bool {
        self.selected.len() < quantity + self.extra_passes && !self.available.is_empty()
    }

    pub fn used_bonus(&self) -> i32 {
        self.used_bonus
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> &[SpecialAbility] {
        &self.selected
    }

    pub fn grant_extra_pass(&mut self) {
        self.extra_passes += 1;
    }

    /// Drop a name from the pool for the rest of the call
    pub fn consume(&mut self, name: &str) {
        self.available.retain(|n| n != name);
    }

    /// Try to add a resolved candidate, upgrading its family if it is stronger.
    ///
    /// The candidate's full bonus equivalent must fit under the cap even when
    /// it replaces a family member; only the difference is charged.
    pub fn offer(&mut self, candidate: SpecialAbility) -> Offer {
        if self.used_bonus + candidate.bonus_equivalent > MAX_TOTAL_BONUS {
            return Offer::OverBudget;
        }

        let family = self
            .selected
            .iter()
            .position(|a| a.base_name == candidate.base_name);

        match family {
            Some(index) => {
                if !candidate.is_stronger_than(&self.selected[index]) {
                    return Offer::Kept;
                }
                self.used_bonus += candidate.bonus_equivalent - self.selected[index].bonus_equivalent;
                let replaced = std::mem::replace(&mut self.selected[index], candidate);
                Offer::Upgraded { replaced: replaced.name }
            }
            None => {
                self.used_bonus += candidate.bonus_equivalent;
                self.selected.push(candidate);
                Offer::Added
            }
        }
    }

    pub fn into_selected(self) -> Vec<SpecialAbility> {
        self.selected
    }
}

/// Table keys whose ability lists suit this item
pub fn table_keys(item: &Item) -> Vec<String> {
    if item.has_attribute(attributes::SHIELD) {
        return vec![attributes::SHIELD.to_string()];
    }

    let mut keys = Vec::new();
    if item.has_attribute(attributes::MELEE) {
        keys.push(attributes::MELEE.to_string());
    }
    if item.has_attribute(attributes::RANGED) {
        keys.push(attributes::RANGED.to_string());
    }
    if keys.is_empty() {
        keys.push(item.item_type.as_str().to_string());
    }
    keys
}

/// Chooses special abilities for items
pub struct AbilitySelector<'a> {
    catalog: &'a dyn AbilityCatalog,
}

impl<'a> AbilitySelector<'a> {
    pub fn new(catalog: &'a dyn AbilityCatalog) -> Self {
        Self { catalog }
    }

    /// Select up to `quantity` abilities for a non-weapon item
    pub fn select<R>(&self, rolls: &mut R, item: &Item, power: PowerTier, quantity: i32) -> Vec<SpecialAbility>
    where
        R: TableSelector + RandomSource + ?Sized,
    {
        self.select_with_suffix(rolls, item, power, quantity, "")
    }

    /// Select up to `quantity` abilities, resolving critical damage for the weapon's multiplier
    pub fn select_for_weapon<R>(&self, rolls: &mut R, weapon: &Weapon, power: PowerTier, quantity: i32) -> Vec<SpecialAbility>
    where
        R: TableSelector + RandomSource + ?Sized,
    {
        self.select_with_suffix(rolls, &weapon.item, power, quantity, critical_suffix(weapon))
    }

    fn select_with_suffix<R>(
        &self,
        rolls: &mut R,
        item: &Item,
        power: PowerTier,
        quantity: i32,
        critical_suffix: &str,
    ) -> Vec<SpecialAbility>
    where
        R: TableSelector + RandomSource + ?Sized,
    {
        if item.magic.bonus < 1 || quantity <= 0 {
            return Vec::new();
        }

        let tables: Vec<(String, Vec<String>)> = table_keys(item)
            .into_iter()
            .map(|key| {
                let entries = rolls.select_all_from(&names::special_abilities(power, &key));
                (key, entries)
            })
            .collect();

        let pool: Vec<String> = tables.iter().flat_map(|(_, entries)| entries.iter().cloned()).collect();
        if pool.is_empty() {
            log::debug!("No special abilities available for {} ({})", item.name, power);
            return Vec::new();
        }

        let quantity = quantity as usize;
        let mut accumulator = Accumulator::new(item.magic.bonus, pool);

        while accumulator.wants_more(quantity) {
            let name = match draw(rolls, &tables, &accumulator) {
                Some(Draw::Candidate(name)) => name,
                Some(Draw::BonusUpgrade) => {
                    accumulator.consume(BONUS_SPECIAL_ABILITY);
                    accumulator.grant_extra_pass();
                    continue;
                }
                None => break,
            };
            accumulator.consume(&name);

            let candidate = resolve(self.catalog, &name, critical_suffix);
            if !candidate.attribute_requirements.is_met_by(&item.attributes) {
                log::debug!("{} does not meet the requirements of {}", item.name, name);
                continue;
            }

            match accumulator.offer(candidate) {
                Offer::Added => log::debug!("Added {} to {}", name, item.name),
                Offer::Upgraded { replaced } => {
                    log::debug!("Upgraded {} to {} on {}", replaced, name, item.name)
                }
                Offer::Kept => log::debug!("{} already has a stronger variant of {}", item.name, name),
                Offer::OverBudget => log::debug!(
                    "{} would push {} over the bonus cap ({} used)",
                    name,
                    item.name,
                    accumulator.used_bonus()
                ),
            }
        }

        accumulator.into_selected()
    }
}

/// Draw a name from the pool, favouring one compatible table per draw
fn draw<R>(rolls: &mut R, tables: &[(String, Vec<String>)], accumulator: &Accumulator) -> Option<Draw>
where
    R: TableSelector + RandomSource + ?Sized,
{
    let available = accumulator.available();

    let table = if tables.len() > 1 {
        let keys: Vec<String> = tables.iter().map(|(key, _)| key.clone()).collect();
        rolls
            .select_random_from(&keys)
            .and_then(|key| tables.iter().find(|(k, _)| *k == key))
    } else {
        tables.first()
    };

    let from_table: Vec<String> = match table {
        Some((_, entries)) => available.iter().filter(|&n| entries.contains(n)).cloned().collect(),
        None => Vec::new(),
    };
    let candidates = if from_table.is_empty() { available } else { &from_table[..] };

    rolls.select_random_from(candidates).map(|name| {
        if name == BONUS_SPECIAL_ABILITY {
            Draw::BonusUpgrade
        } else {
            Draw::Candidate(name)
        }
    })
}
