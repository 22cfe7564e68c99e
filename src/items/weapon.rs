//! Weapon records
//!
//! A weapon is an [`Item`] plus combat statistics. Double weapons carry a
//! second head with its own damage lists and enhancement bonus.

use serde::{Deserialize, Serialize};

use super::item::{attributes, Damage, Item, ItemType};

/// Damage state of one weapon head
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponHead {
    pub damages: Vec<Damage>,
    pub critical_damages: Vec<Damage>,
}

impl WeaponHead {
    pub fn new(damages: Vec<Damage>, critical_damages: Vec<Damage>) -> Self {
        Self { damages, critical_damages }
    }

    /// Type of the head's first damage entry
    pub fn damage_type(&self) -> &str {
        self.damages
            .first()
            .map(|d| d.damage_type.as_str())
            .unwrap_or_default()
    }

    /// Type of the head's first critical entry, falling back to the damage type
    pub fn critical_damage_type(&self) -> &str {
        self.critical_damages
            .first()
            .map(|d| d.damage_type.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.damage_type())
    }

    pub fn description(&self) -> String {
        join_damages(&self.damages)
    }

    pub fn critical_description(&self) -> String {
        join_damages(&self.critical_damages)
    }
}

fn join_damages(damages: &[Damage]) -> String {
    damages
        .iter()
        .map(Damage::description)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// A weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub item: Item,
    /// Critical multiplier tag, e.g. `x2`
    pub critical_multiplier: String,
    /// Number of natural d20 results that threaten a critical
    pub threat_range: u32,
    pub threat_range_description: String,
    pub primary: WeaponHead,
    pub secondary: WeaponHead,
    pub secondary_magic_bonus: i32,
    /// Second head shares the full enhancement (and abilities) of the first
    pub secondary_has_abilities: bool,
}

impl Weapon {
    pub fn new(name: impl Into<String>, critical_multiplier: impl Into<String>) -> Self {
        Self {
            item: Item::new(name, ItemType::Weapon),
            critical_multiplier: critical_multiplier.into(),
            threat_range: 1,
            threat_range_description: threat_range_description(1),
            primary: WeaponHead::default(),
            secondary: WeaponHead::default(),
            secondary_magic_bonus: 0,
            secondary_has_abilities: false,
        }
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item = self.item.with_attributes(attributes);
        self
    }

    pub fn with_primary(mut self, head: WeaponHead) -> Self {
        self.primary = head;
        self
    }

    pub fn with_secondary(mut self, head: WeaponHead) -> Self {
        self.secondary = head;
        self.item.attributes.insert(attributes::DOUBLE.to_string());
        self
    }

    pub fn with_threat_range(mut self, threat_range: u32) -> Self {
        self.set_threat_range(threat_range);
        self
    }

    pub fn set_threat_range(&mut self, threat_range: u32) {
        self.threat_range = threat_range;
        self.threat_range_description = threat_range_description(threat_range);
    }

    pub fn magic_bonus(&self) -> i32 {
        self.item.magic.bonus
    }
}

/// Inclusive d20 range for a threat range, e.g. 2 -> `19-20`
pub fn threat_range_description(threat_range: u32) -> String {
    let threat_range = threat_range.clamp(1, 20);
    if threat_range == 1 {
        return "20".to_string();
    }
    format!("{}-20", 21 - threat_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_range_description() {
        assert_eq!(threat_range_description(1), "20");
        assert_eq!(threat_range_description(2), "19-20");
        assert_eq!(threat_range_description(4), "17-20");
        assert_eq!(threat_range_description(6), "15-20");
    }

    #[test]
    fn test_head_types() {
        let head = WeaponHead::new(vec![Damage::new("1d8", "Slashing")], Vec::new());
        assert_eq!(head.damage_type(), "Slashing");
        assert_eq!(head.critical_damage_type(), "Slashing");

        let head = WeaponHead::new(
            vec![Damage::new("1d8", "Slashing")],
            vec![Damage::new("2d8", "Piercing")],
        );
        assert_eq!(head.critical_damage_type(), "Piercing");
    }

    #[test]
    fn test_head_descriptions() {
        let head = WeaponHead::new(
            vec![Damage::new("1d8", "Slashing"), Damage::new("1d6", "Fire")],
            vec![Damage::new("2d8", "Slashing")],
        );
        assert_eq!(head.description(), "1d8 slashing + 1d6 fire");
        assert_eq!(head.critical_description(), "2d8 slashing");
    }

    #[test]
    fn test_secondary_marks_double() {
        let weapon = Weapon::new("quarterstaff", "x2")
            .with_secondary(WeaponHead::new(vec![Damage::new("1d6", "Bludgeoning")], Vec::new()));
        assert!(weapon.item.has_attribute(attributes::DOUBLE));
    }
}
