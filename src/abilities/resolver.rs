//! Ability resolution
//!
//! Turns an ability name into a fully populated [`SpecialAbility`] using the
//! static ability tables.

use super::ability::{AbilityData, SpecialAbility};
use super::requirements::Requirements;
use crate::items::Weapon;
use crate::tables::AbilityCatalog;

/// Resolve `name`. Unknown names degrade to a zero-power, zero-cost ability
/// of their own family.
pub fn resolve(catalog: &dyn AbilityCatalog, name: &str, critical_suffix: &str) -> SpecialAbility {
    let data = catalog.ability_data(name).unwrap_or_else(|| {
        log::debug!("No ability data for {:?}", name);
        AbilityData::unknown(name)
    });

    let requirement_tokens = catalog.attribute_requirements(&data.base_name);
    let critical_key = format!("{}{}", name, critical_suffix);

    SpecialAbility {
        name: name.to_string(),
        attribute_requirements: Requirements::parse(&requirement_tokens),
        damages: catalog.damages(name),
        critical_damages: catalog.critical_damages(&critical_key),
        base_name: data.base_name,
        power: data.power,
        bonus_equivalent: data.bonus_equivalent,
    }
}

/// Critical-damage key suffix for a weapon
pub fn critical_suffix(weapon: &Weapon) -> &str {
    &weapon.critical_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Damage;
    use crate::tables::TableData;

    fn catalog() -> TableData {
        let mut data = TableData::default();
        data.add_ability("Flaming Burst", AbilityData::new("Flaming", 2, 2));
        data.damages.insert("Flaming Burst".into(), vec![Damage::new("1d6", "Fire")]);
        data.critical_damages.insert("Flaming Burstx3".into(), vec![Damage::new("2d10", "Fire")]);
        data.requirements.insert("Flaming".into(), vec!["Melee/Ranged".into()]);
        data
    }

    #[test]
    fn test_resolve_known_ability() {
        let ability = resolve(&catalog(), "Flaming Burst", "x3");

        assert_eq!(ability.base_name, "Flaming");
        assert_eq!(ability.power, 2);
        assert_eq!(ability.bonus_equivalent, 2);
        assert_eq!(ability.damages, vec![Damage::new("1d6", "Fire")]);
        assert_eq!(ability.critical_damages, vec![Damage::new("2d10", "Fire")]);
        assert_eq!(ability.attribute_requirements.tokens(), vec!["Melee/Ranged"]);
    }

    #[test]
    fn test_critical_damage_depends_on_suffix() {
        let ability = resolve(&catalog(), "Flaming Burst", "x2");
        assert!(ability.critical_damages.is_empty());

        let ability = resolve(&catalog(), "Flaming Burst", "");
        assert!(ability.critical_damages.is_empty());
    }

    #[test]
    fn test_resolve_unknown_ability() {
        let ability = resolve(&catalog(), "Glittering", "x2");

        assert_eq!(ability.name, "Glittering");
        assert_eq!(ability.base_name, "Glittering");
        assert_eq!(ability.power, 0);
        assert_eq!(ability.bonus_equivalent, 0);
        assert!(ability.attribute_requirements.is_empty());
        assert!(ability.damages.is_empty());
    }
}
