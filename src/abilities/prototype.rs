//! Template ability resolution
//!
//! Custom and templated items name their abilities up front. Known names are
//! re-resolved from the tables; anything else is kept as the caller described
//! it, stripped of requirements and damage.

use super::ability::SpecialAbility;
use super::resolver::resolve;
use crate::tables::AbilityCatalog;

/// Resolve an explicit ability list, keeping the strongest variant of each
/// family in the position where the family first appeared.
pub fn resolve_all(
    catalog: &dyn AbilityCatalog,
    prototypes: &[SpecialAbility],
    critical_suffix: &str,
) -> Vec<SpecialAbility> {
    let mut resolved: Vec<SpecialAbility> = Vec::with_capacity(prototypes.len());

    for prototype in prototypes {
        let ability = if catalog.is_known(&prototype.name) {
            resolve(catalog, &prototype.name, critical_suffix)
        } else {
            SpecialAbility::custom(
                prototype.name.clone(),
                prototype.base_name.clone(),
                prototype.power,
                prototype.bonus_equivalent,
            )
        };

        if resolved.iter().any(|a| a.name == ability.name) {
            continue;
        }

        match resolved.iter_mut().find(|a| a.base_name == ability.base_name) {
            Some(existing) if ability.is_stronger_than(existing) => {
                log::debug!("Template upgrades {} to {}", existing.name, ability.name);
                *existing = ability;
            }
            Some(_) => {}
            None => resolved.push(ability),
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityData;
    use crate::items::Damage;
    use crate::tables::TableData;

    fn catalog() -> TableData {
        let mut data = TableData::default();
        data.add_ability("Flaming", AbilityData::new("Flaming", 1, 1));
        data.add_ability("Flaming Burst", AbilityData::new("Flaming", 2, 2));
        data.add_ability("Keen", AbilityData::new("Keen", 1, 1));
        data.damages.insert("Flaming".into(), vec![Damage::new("1d6", "Fire")]);
        data.critical_damages.insert("Flaming Burstx2".into(), vec![Damage::new("1d10", "Fire")]);
        data.requirements.insert("Keen".into(), vec!["Slashing/Piercing".into()]);
        data
    }

    #[test]
    fn test_known_names_use_table_data() {
        let mut prototype = SpecialAbility::custom("Flaming", "Wrong", 9, 9);
        prototype.damages.push(Damage::new("9d9", "Acid"));

        let abilities = resolve_all(&catalog(), &[prototype], "x2");

        assert_eq!(abilities.len(), 1);
        assert_eq!(abilities[0].base_name, "Flaming");
        assert_eq!(abilities[0].power, 1);
        assert_eq!(abilities[0].bonus_equivalent, 1);
        assert_eq!(abilities[0].damages, vec![Damage::new("1d6", "Fire")]);
    }

    #[test]
    fn test_custom_names_keep_caller_data() {
        let mut prototype = SpecialAbility::custom("Moonlit", "Lunar", 3, 2);
        prototype.damages.push(Damage::new("1d4", "Cold"));
        prototype.attribute_requirements = crate::abilities::Requirements::parse(&["Ranged"]);

        let abilities = resolve_all(&catalog(), &[prototype], "x2");

        assert_eq!(abilities[0].name, "Moonlit");
        assert_eq!(abilities[0].base_name, "Lunar");
        assert_eq!(abilities[0].power, 3);
        assert_eq!(abilities[0].bonus_equivalent, 2);
        assert!(abilities[0].damages.is_empty());
        assert!(abilities[0].attribute_requirements.is_empty());
    }

    #[test]
    fn test_strongest_family_member_keeps_first_position() {
        let prototypes = vec![
            SpecialAbility::named("Flaming"),
            SpecialAbility::named("Keen"),
            SpecialAbility::named("Flaming Burst"),
            SpecialAbility::named("Flaming"),
        ];

        let abilities = resolve_all(&catalog(), &prototypes, "x2");

        let names: Vec<&str> = abilities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Flaming Burst", "Keen"]);
        assert_eq!(abilities[0].critical_damages, vec![Damage::new("1d10", "Fire")]);
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let prototypes = vec![SpecialAbility::named("Keen"), SpecialAbility::named("Keen")];

        let abilities = resolve_all(&catalog(), &prototypes, "");

        assert_eq!(abilities.len(), 1);
    }

    #[test]
    fn test_same_name_different_family_collapses() {
        let prototypes = vec![
            SpecialAbility::custom("Moonlit", "Lunar", 1, 1),
            SpecialAbility::custom("Moonlit", "Silver", 1, 1),
        ];

        let abilities = resolve_all(&catalog(), &prototypes, "");

        assert_eq!(abilities.len(), 1);
        assert_eq!(abilities[0].base_name, "Lunar");
    }

    #[test]
    fn test_no_budget_applies() {
        let prototypes = vec![
            SpecialAbility::custom("Mighty", "Mighty", 1, 8),
            SpecialAbility::custom("Mightier", "Mightier", 1, 8),
        ];

        assert_eq!(resolve_all(&catalog(), &prototypes, "").len(), 2);
    }
}
