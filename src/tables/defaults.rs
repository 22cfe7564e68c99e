//! Built-in table content
//!
//! Sample tables used when no data directory overrides them. Export them with
//! [`super::export_default_data`] to get editable RON files.

use super::data::{PercentileTable, TableData};
use super::names;
use crate::abilities::{AbilityData, BONUS_SPECIAL_ABILITY, KEEN, SPELL_STORING};
use crate::items::{attributes, Damage, PowerTier};

/// (name, family, power, bonus equivalent)
const ABILITIES: &[(&str, &str, i32, i32)] = &[
    // Weapon
    ("Bane", "Bane", 1, 1),
    ("Defending", "Defending", 1, 1),
    ("Distance", "Distance", 1, 1),
    ("Flaming", "Flaming", 1, 1),
    ("Flaming Burst", "Flaming", 2, 2),
    ("Frost", "Frost", 1, 1),
    ("Icy Burst", "Frost", 2, 2),
    ("Shock", "Shock", 1, 1),
    ("Shocking Burst", "Shock", 2, 2),
    ("Ghost Touch", "Ghost Touch", 1, 1),
    (KEEN, KEEN, 1, 1),
    ("Merciful", "Merciful", 1, 1),
    ("Returning", "Returning", 1, 1),
    ("Seeking", "Seeking", 1, 1),
    (SPELL_STORING, SPELL_STORING, 1, 1),
    ("Thundering", "Thundering", 1, 1),
    ("Holy", "Holy", 2, 2),
    ("Unholy", "Unholy", 2, 2),
    ("Wounding", "Wounding", 2, 2),
    ("Speed", "Speed", 3, 3),
    ("Brilliant Energy", "Brilliant Energy", 4, 4),
    ("Dancing", "Dancing", 4, 4),
    ("Vorpal", "Vorpal", 5, 5),
    // Armor and shields
    ("Glamered", "Glamered", 1, 0),
    ("Light Fortification", "Fortification", 1, 1),
    ("Moderate Fortification", "Fortification", 2, 3),
    ("Heavy Fortification", "Fortification", 3, 5),
    ("Shadow", "Shadow", 1, 0),
    ("Improved Shadow", "Shadow", 2, 0),
    ("Greater Shadow", "Shadow", 3, 0),
    ("Slick", "Slick", 1, 0),
    ("Spell Resistance (13)", "Spell Resistance", 1, 2),
    ("Spell Resistance (15)", "Spell Resistance", 2, 3),
    ("Spell Resistance (17)", "Spell Resistance", 3, 4),
    ("Spell Resistance (19)", "Spell Resistance", 4, 5),
    ("Arrow Catching", "Arrow Catching", 1, 1),
    ("Bashing", "Bashing", 1, 1),
    ("Blinding", "Blinding", 1, 1),
    ("Animated", "Animated", 1, 2),
    ("Arrow Deflection", "Arrow Deflection", 1, 2),
    ("Reflecting", "Reflecting", 1, 5),
];

/// (family, requirement tokens)
const REQUIREMENTS: &[(&str, &[&str])] = &[
    ("Defending", &[attributes::MELEE]),
    ("Distance", &[attributes::RANGED]),
    (KEEN, &["Slashing/Piercing", attributes::MELEE]),
    ("Returning", &[attributes::THROWN]),
    ("Seeking", &[attributes::RANGED]),
    (SPELL_STORING, &[attributes::MELEE]),
    ("Thundering", &["Melee/Ammunition"]),
    ("Wounding", &["Slashing/Piercing"]),
    ("Dancing", &[attributes::MELEE]),
    ("Vorpal", &[attributes::SLASHING, attributes::MELEE]),
    ("Glamered", &[attributes::ARMOR]),
    ("Shadow", &[attributes::ARMOR]),
    ("Slick", &[attributes::ARMOR]),
    ("Arrow Catching", &[attributes::SHIELD]),
    ("Bashing", &[attributes::SHIELD]),
    ("Blinding", &[attributes::SHIELD]),
    ("Animated", &[attributes::SHIELD]),
    ("Arrow Deflection", &[attributes::SHIELD]),
    ("Reflecting", &[attributes::SHIELD]),
];

const MINOR_MELEE: &[&str] = &["Bane", "Defending", "Flaming", "Frost", "Shock", "Ghost Touch", KEEN, "Merciful", SPELL_STORING];
const MEDIUM_MELEE: &[&str] = &["Flaming Burst", "Icy Burst", "Shocking Burst", "Holy", "Unholy", "Thundering", "Wounding"];
const MAJOR_MELEE: &[&str] = &["Speed", "Brilliant Energy", "Dancing", "Vorpal"];

const MINOR_RANGED: &[&str] = &["Bane", "Distance", "Flaming", "Frost", "Shock", "Returning", "Seeking", "Merciful"];
const MEDIUM_RANGED: &[&str] = &["Flaming Burst", "Icy Burst", "Shocking Burst", "Holy", "Unholy", "Thundering"];
const MAJOR_RANGED: &[&str] = &["Speed", "Brilliant Energy"];

const MINOR_ARMOR: &[&str] = &["Glamered", "Light Fortification", "Shadow", "Slick", "Spell Resistance (13)"];
const MEDIUM_ARMOR: &[&str] = &["Moderate Fortification", "Improved Shadow", "Spell Resistance (15)", "Spell Resistance (17)"];
const MAJOR_ARMOR: &[&str] = &["Heavy Fortification", "Greater Shadow", "Spell Resistance (19)"];

const MINOR_SHIELD: &[&str] = &["Arrow Catching", "Bashing", "Blinding", "Light Fortification", "Spell Resistance (13)"];
const MEDIUM_SHIELD: &[&str] = &["Animated", "Arrow Deflection", "Moderate Fortification", "Spell Resistance (15)"];
const MAJOR_SHIELD: &[&str] = &["Reflecting", "Heavy Fortification", "Spell Resistance (19)"];

const ARCANE_SPELLS: &[&[&str]] = &[
    &["acid splash", "daze", "light", "ray of frost"],
    &["magic missile", "shocking grasp", "ray of enfeeblement", "sleep"],
    &["acid arrow", "scorching ray", "blindness/deafness", "touch of idiocy"],
    &["lightning bolt", "fireball", "vampiric touch", "ray of exhaustion"],
];

const DIVINE_SPELLS: &[&[&str]] = &[
    &["guidance", "resistance", "virtue", "inflict minor wounds"],
    &["cause fear", "doom", "inflict light wounds", "command"],
    &["hold person", "inflict moderate wounds", "silence", "sound burst"],
    &["bestow curse", "contagion", "inflict serious wounds", "searing light"],
];

fn energy_damages(data: &mut TableData, family: &str, burst: &str, damage_type: &str) {
    data.damages.insert(family.to_string(), vec![Damage::new("1d6", damage_type)]);
    data.damages.insert(burst.to_string(), vec![Damage::new("1d6", damage_type)]);
    for (multiplier, roll) in [("x2", "1d10"), ("x3", "2d10"), ("x4", "3d10")] {
        data.critical_damages
            .insert(format!("{}{}", burst, multiplier), vec![Damage::new(roll, damage_type)]);
    }
}

fn ability_lists(power: PowerTier, tiers: [&[&str]; 3]) -> Vec<String> {
    let reach = match power {
        PowerTier::Mundane => 0,
        PowerTier::Minor => 1,
        PowerTier::Medium => 2,
        PowerTier::Major => 3,
    };
    let mut names: Vec<String> = tiers[..reach]
        .iter()
        .flat_map(|tier| tier.iter().map(|n| n.to_string()))
        .collect();
    if power != PowerTier::Minor && !names.is_empty() {
        names.push(BONUS_SPECIAL_ABILITY.to_string());
    }
    names
}

/// Default table content
pub fn default_table_data() -> TableData {
    let mut data = TableData::default();

    for &(name, family, power, bonus) in ABILITIES {
        data.add_ability(name, AbilityData::new(family, power, bonus));
    }
    for &(family, tokens) in REQUIREMENTS {
        data.requirements
            .insert(family.to_string(), tokens.iter().map(|t| t.to_string()).collect());
    }

    energy_damages(&mut data, "Flaming", "Flaming Burst", "Fire");
    energy_damages(&mut data, "Frost", "Icy Burst", "Cold");
    energy_damages(&mut data, "Shock", "Shocking Burst", "Electricity");
    data.damages.insert(
        "Holy".into(),
        vec![Damage::new("2d6", "").with_condition("against evil")],
    );
    data.damages.insert(
        "Unholy".into(),
        vec![Damage::new("2d6", "").with_condition("against good")],
    );
    data.damages.insert(
        "Bane".into(),
        vec![Damage::new("2d6", "").with_condition("against designated foe")],
    );
    for (multiplier, roll) in [("x2", "1d8"), ("x3", "2d8"), ("x4", "3d8")] {
        data.critical_damages
            .insert(format!("Thundering{}", multiplier), vec![Damage::new(roll, "Sonic")]);
    }

    for power in [PowerTier::Minor, PowerTier::Medium, PowerTier::Major] {
        let keyed = [
            (attributes::MELEE, [MINOR_MELEE, MEDIUM_MELEE, MAJOR_MELEE]),
            (attributes::RANGED, [MINOR_RANGED, MEDIUM_RANGED, MAJOR_RANGED]),
            (attributes::ARMOR, [MINOR_ARMOR, MEDIUM_ARMOR, MAJOR_ARMOR]),
            (attributes::SHIELD, [MINOR_SHIELD, MEDIUM_SHIELD, MAJOR_SHIELD]),
        ];
        for (key, tiers) in keyed {
            data.collections
                .insert(names::special_abilities(power, key), ability_lists(power, tiers));
        }
    }

    let bonus_bands: [(PowerTier, &[(u32, &str)]); 3] = [
        (PowerTier::Minor, &[(70, "1"), (95, "2"), (100, "3")]),
        (PowerTier::Medium, &[(20, "1"), (60, "2"), (90, "3"), (100, "4")]),
        (PowerTier::Major, &[(20, "2"), (50, "3"), (80, "4"), (100, "5")]),
    ];
    for (power, bands) in bonus_bands {
        data.percentiles
            .insert(names::weapon_bonus(power), PercentileTable::from_bands(bands));
        data.percentiles
            .insert(names::armor_bonus(power), PercentileTable::from_bands(bands));
    }

    let quantity_bands: [(PowerTier, &[(u32, &str)]); 3] = [
        (PowerTier::Minor, &[(85, "0"), (100, "1")]),
        (PowerTier::Medium, &[(60, "0"), (90, "1"), (100, "2")]),
        (PowerTier::Major, &[(35, "0"), (75, "1"), (95, "2"), (100, "3")]),
    ];
    for (power, bands) in quantity_bands {
        data.percentiles
            .insert(names::special_ability_quantity(power), PercentileTable::from_bands(bands));
    }

    let spell_level_bands: [(PowerTier, &[(u32, &str)]); 3] = [
        (PowerTier::Minor, &[(10, "0"), (50, "1"), (85, "2"), (100, "3")]),
        (PowerTier::Medium, &[(30, "1"), (70, "2"), (100, "3")]),
        (PowerTier::Major, &[(40, "2"), (100, "3")]),
    ];
    for (power, bands) in spell_level_bands {
        data.percentiles
            .insert(names::spell_levels(power), PercentileTable::from_bands(bands));
    }

    data.collections.insert(
        names::SPELL_TYPES.to_string(),
        vec!["Arcane".to_string(), "Divine".to_string()],
    );
    for (spell_type, levels) in [("Arcane", ARCANE_SPELLS), ("Divine", DIVINE_SPELLS)] {
        for (level, spells) in levels.iter().enumerate() {
            data.collections.insert(
                names::spells(spell_type, level as u32),
                spells.iter().map(|s| s.to_string()).collect(),
            );
        }
    }

    data.booleans
        .insert(names::SPELL_STORING_CONTAINS_SPELL.to_string(), 0.5);

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::AbilityCatalog;

    #[test]
    fn test_every_listed_ability_is_known() {
        let data = default_table_data();

        for (table, entries) in &data.collections {
            if !table.ends_with("SpecialAbilities") {
                continue;
            }
            for name in entries {
                if name == BONUS_SPECIAL_ABILITY {
                    continue;
                }
                assert!(data.is_known(name), "{} in {} has no ability data", name, table);
            }
        }
    }

    #[test]
    fn test_major_tables_include_lower_tiers() {
        let data = default_table_data();
        let major = data.collection("MajorMeleeSpecialAbilities");

        assert!(major.contains(&"Flaming".to_string()));
        assert!(major.contains(&"Vorpal".to_string()));
        assert!(major.contains(&BONUS_SPECIAL_ABILITY.to_string()));
        assert!(!data.collection("MinorMeleeSpecialAbilities").contains(&"Vorpal".to_string()));
    }

    #[test]
    fn test_percentile_tables_cover_d100() {
        let data = default_table_data();

        for (name, table) in &data.percentiles {
            for roll in 1..=100 {
                assert!(table.lookup(roll).is_some(), "{} misses roll {}", name, roll);
            }
        }
    }
}
