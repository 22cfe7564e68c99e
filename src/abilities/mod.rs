//! Special abilities
//!
//! Resolution, budgeted selection, template resolution and weapon effects.

pub mod ability;
pub mod applicator;
pub mod prototype;
pub mod requirements;
pub mod resolver;
pub mod selector;

pub use ability::{AbilityData, SpecialAbility, BONUS_SPECIAL_ABILITY, KEEN, SPELL_STORING};
pub use applicator::apply;
pub use prototype::resolve_all;
pub use requirements::Requirements;
pub use resolver::{critical_suffix, resolve};
pub use selector::{AbilitySelector, Accumulator, Draw, Offer, MAX_TOTAL_BONUS};
