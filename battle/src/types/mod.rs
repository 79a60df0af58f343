//! Output model for a parsed battle

mod combatant;
mod species;
mod team;

pub use combatant::{Combatant, MAX_MOVES};
pub use species::{
    COLLAPSED_SPECIES, FORM_OVERRIDES, HYPHENATED_SPECIES, SpeciesTable, canonicalize,
    is_wildcard_form, species_root,
};
pub use team::{BattleResult, DynamaxEvent, Team};
