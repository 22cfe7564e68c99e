//! Magic item generation
//!
//! Turns mundane weapons, armor and shields into magic items: rolls the
//! enhancement bonus and ability count for a power tier, selects abilities
//! and applies them.

use super::item::{Item, PowerTier};
use super::weapon::Weapon;
use crate::abilities::{self, AbilitySelector, SpecialAbility};
use crate::tables::{names, AbilityCatalog, RandomSource, SpellGenerator, TableSelector};

/// Roll an integer result, treating blanks and garbage as zero
fn roll_number<R>(rolls: &mut R, table: &str) -> i32
where
    R: TableSelector + ?Sized,
{
    let result = rolls.select_percentile(table);
    result.trim().parse().unwrap_or_else(|_| {
        log::warn!("Table {} gave non-numeric result {:?}", table, result);
        0
    })
}

/// Generate a magic weapon from a mundane one
pub fn generate_magic_weapon<R>(
    catalog: &dyn AbilityCatalog,
    rolls: &mut R,
    mut weapon: Weapon,
    power: PowerTier,
) -> Weapon
where
    R: TableSelector + RandomSource + SpellGenerator + ?Sized,
{
    if power == PowerTier::Mundane {
        return weapon;
    }

    let bonus = roll_number(rolls, &names::weapon_bonus(power));
    weapon.item.magic.bonus = bonus;
    if weapon.secondary_has_abilities {
        weapon.secondary_magic_bonus = bonus;
    }

    let quantity = roll_number(rolls, &names::special_ability_quantity(power));
    let selected = AbilitySelector::new(catalog).select_for_weapon(rolls, &weapon, power, quantity);
    weapon.item.magic.special_abilities = selected;

    let weapon = abilities::apply(rolls, weapon);
    log::info!("Generated {} weapon: {}", power, weapon.item.display_name());
    log::debug!(
        "{} damage {}, critical {}",
        weapon.item.name,
        weapon.primary.description(),
        weapon.primary.critical_description()
    );
    weapon
}

/// Generate magic armor or a magic shield from a mundane one
pub fn generate_magic_armor<R>(
    catalog: &dyn AbilityCatalog,
    rolls: &mut R,
    mut item: Item,
    power: PowerTier,
) -> Item
where
    R: TableSelector + RandomSource + ?Sized,
{
    if power == PowerTier::Mundane {
        return item;
    }

    item.magic.bonus = roll_number(rolls, &names::armor_bonus(power));
    let quantity = roll_number(rolls, &names::special_ability_quantity(power));
    item.magic.special_abilities = AbilitySelector::new(catalog).select(rolls, &item, power, quantity);

    log::info!("Generated {} armor: {}", power, item.display_name());
    item
}

/// Build a weapon from a template: explicit bonus and ability list
pub fn generate_from_template<R>(
    catalog: &dyn AbilityCatalog,
    rolls: &mut R,
    mut weapon: Weapon,
    bonus: i32,
    prototypes: &[SpecialAbility],
) -> Weapon
where
    R: TableSelector + SpellGenerator + ?Sized,
{
    weapon.item.magic.bonus = bonus;
    if weapon.secondary_has_abilities {
        weapon.secondary_magic_bonus = bonus;
    }

    let suffix = abilities::critical_suffix(&weapon).to_string();
    weapon.item.magic.special_abilities = abilities::resolve_all(catalog, prototypes, &suffix);

    abilities::apply(rolls, weapon)
}
