//! Nickname to pokemon resolution
//!
//! Logs often use a nickname before the real species is known (team preview
//! only shows species), and some pokemon change their visible species during
//! a battle. The resolver keeps one [`Combatant`] per real pokemon by
//! re-keying existing records instead of creating new ones.

use crate::types::{Combatant, Team, is_wildcard_form, species_root};

/// Species whose different forms on one team are different pokemon.
pub const MERGE_EXCLUSIONS: &[&str] = &["Silvally", "Gourgeist", "Pumpkaboo"];

/// How a nickname was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The nickname already named a pokemon
    Existing,
    /// An existing pokemon of the same species was re-keyed under the nickname
    Merged { previous: String },
    /// A new pokemon was added
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityResolver {
    pub exclusions: &'static [&'static str],
}

impl IdentityResolver {
    pub const STANDARD: IdentityResolver = IdentityResolver {
        exclusions: MERGE_EXCLUSIONS,
    };

    /// Find or create the pokemon for `nickname`, seen as `species`.
    ///
    /// Counters are left untouched; the caller decides what the sighting means.
    pub fn resolve<'t>(
        &self,
        team: &'t mut Team,
        nickname: &str,
        species: &str,
    ) -> (&'t mut Combatant, Resolution) {
        if let Some(index) = team.pokemons.get_index_of(nickname) {
            return (&mut team.pokemons[index], Resolution::Existing);
        }

        if let Some(previous) = self.merge_candidate(team, species) {
            let index = rename(team, &previous, nickname, species);
            tracing::debug!(%nickname, %species, %previous, "merged pokemon under new nickname");
            return (&mut team.pokemons[index], Resolution::Merged { previous });
        }

        tracing::debug!(%nickname, %species, "new pokemon");
        let (index, _) = team
            .pokemons
            .insert_full(nickname.to_string(), Combatant::new(species));
        (&mut team.pokemons[index], Resolution::Created)
    }

    /// Add a pokemon announced in team preview, keyed by its species.
    ///
    /// Preview lists each pokemon once, so nothing is merged here: two forms of
    /// one family (Rotom-Wash and Rotom-Heat) stay separate.
    pub fn reveal<'t>(&self, team: &'t mut Team, species: &str) -> (&'t mut Combatant, Resolution) {
        if let Some(index) = team.pokemons.get_index_of(species) {
            return (&mut team.pokemons[index], Resolution::Existing);
        }

        let (index, _) = team
            .pokemons
            .insert_full(species.to_string(), Combatant::new(species));
        (&mut team.pokemons[index], Resolution::Created)
    }

    pub fn is_excluded(&self, species: &str) -> bool {
        let root = species_root(species);
        self.exclusions.iter().any(|excluded| *excluded == root)
    }

    /// The nickname of the one existing pokemon that `species` should merge into
    fn merge_candidate(&self, team: &Team, species: &str) -> Option<String> {
        let root = species_root(species);
        let mut candidates: Vec<(&String, &Combatant)> = team
            .pokemons
            .iter()
            .filter(|(_, c)| species_root(&c.species) == root)
            .collect();

        if candidates.len() > 1 {
            candidates.retain(|(_, c)| c.species == species);
        }
        if candidates.len() > 1 {
            // Prefer a preview entry nobody has claimed yet
            candidates.retain(|(nickname, c)| **nickname == c.species);
        }

        let [(nickname, combatant)] = candidates.as_slice() else {
            return None;
        };

        if self.is_excluded(species)
            && combatant.species != species
            && !is_wildcard_form(&combatant.species)
        {
            return None;
        }

        Some(nickname.to_string())
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Re-key `previous` as `nickname` in place, keeping its position in the team
fn rename(team: &mut Team, previous: &str, nickname: &str, species: &str) -> usize {
    let Some((index, _, mut combatant)) = team.pokemons.shift_remove_full(previous) else {
        let (index, _) = team
            .pokemons
            .insert_full(nickname.to_string(), Combatant::new(species));
        return index;
    };

    // A bare base name never overrides a known forme (Greninja-Ash switches in as Greninja)
    let less_specific = species == species_root(&combatant.species)
        && combatant.species != species
        && !is_wildcard_form(&combatant.species);
    if !less_specific {
        combatant.species = species.to_string();
    }
    team.pokemons.shift_insert(index, nickname.to_string(), combatant);

    if team.lead.as_deref() == Some(previous) {
        team.lead = Some(nickname.to_string());
    }

    index
}
