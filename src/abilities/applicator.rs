//! Weapon ability effects
//!
//! Realises the resolved abilities on a weapon's statistics. Run once per
//! generated weapon: extra damage is appended, not reconciled.

use super::ability::{SpecialAbility, KEEN, SPELL_STORING};
use crate::items::{PowerTier, Weapon, WeaponHead};
use crate::tables::{names, SpellGenerator, TableSelector};

/// Append ability damage to a head, typing untyped entries with the head's own types
fn merge_into_head(head: &mut WeaponHead, abilities: &[SpecialAbility]) {
    let damage_type = head.damage_type().to_string();
    let critical_type = head.critical_damage_type().to_string();

    for ability in abilities {
        head.damages
            .extend(ability.damages.iter().map(|d| d.typed_or(&damage_type)));
        head.critical_damages
            .extend(ability.critical_damages.iter().map(|d| d.typed_or(&critical_type)));
    }
}

/// Apply every attached ability to the weapon
pub fn apply<R>(rolls: &mut R, mut weapon: Weapon) -> Weapon
where
    R: TableSelector + SpellGenerator + ?Sized,
{
    let abilities = std::mem::take(&mut weapon.item.magic.special_abilities);

    merge_into_head(&mut weapon.primary, &abilities);
    if weapon.secondary_has_abilities {
        merge_into_head(&mut weapon.secondary, &abilities);
    }

    if abilities.iter().any(|a| a.name == KEEN) {
        weapon.set_threat_range(weapon.threat_range * 2);
    }

    if abilities.iter().any(|a| a.name == SPELL_STORING)
        && rolls.select_boolean(names::SPELL_STORING_CONTAINS_SPELL)
    {
        let level = rolls.generate_level(PowerTier::Minor);
        let spell_type = rolls.generate_type();
        let spell = rolls.generate(&spell_type, level);
        log::debug!("{} stores {} ({} level {})", weapon.item.name, spell, spell_type, level);
        weapon.item.contents.push(spell);
    }

    weapon.item.magic.special_abilities = abilities;
    weapon
}
