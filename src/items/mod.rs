//! Item system

pub mod item;
pub mod loot;
pub mod weapon;

pub use item::{attributes, Damage, Item, ItemType, Magic, PowerTier};
pub use loot::{generate_from_template, generate_magic_armor, generate_magic_weapon};
pub use weapon::{threat_range_description, Weapon, WeaponHead};
