//! Archetype classification hook

use tally_battle::Team;

/// Maps a finished team to an archetype label.
///
/// Implementations are shared between batch workers, so they must be `Sync`.
pub trait TeamClassifier: Sync {
    /// The archetype of `team`, or `None` if it fits no known category
    fn classify(&self, team: &Team) -> Option<String>;
}

impl<F> TeamClassifier for F
where
    F: Fn(&Team) -> Option<String> + Sync,
{
    fn classify(&self, team: &Team) -> Option<String> {
        self(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_battle::Combatant;

    #[test]
    fn test_closure_classifier() {
        let rain = |team: &Team| {
            team.species()
                .any(|s| s == "Pelipper")
                .then(|| "Rain".to_string())
        };

        let mut team = Team::new();
        assert_eq!(rain.classify(&team), None);

        team.pokemons.insert("Pelipper".to_string(), Combatant::new("Pelipper"));
        assert_eq!(rain.classify(&team).as_deref(), Some("Rain"));
    }
}
