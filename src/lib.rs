//! Magicforge - procedural magic items for tabletop RPGs
//!
//! Picks special abilities for weapons, armor and shields within a bonus
//! budget, and merges their effects into the item's statistics.

pub mod abilities;
pub mod config;
pub mod error;
pub mod items;
pub mod tables;

// Re-export commonly used types
pub use abilities::{AbilitySelector, SpecialAbility};
pub use config::ForgeConfig;
pub use error::DataError;
pub use items::{Item, ItemType, PowerTier, Weapon};
pub use tables::{TableData, TableRoller};
