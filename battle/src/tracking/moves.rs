//! Move ledger
//!
//! Records the moves a pokemon actually knows. Moves called through another
//! effect, empowered variants and moves used while transformed are not the
//! user's own and are left out.

use crate::types::Combatant;

/// Effects that make a pokemon use a move it does not know.
pub const COPY_EFFECTS: &[&str] = &[
    "Magic Bounce",
    "Metronome",
    "Assist",
    "Snatch",
    "Magic Coat",
    "Nature Power",
    "Me First",
    "Copycat",
    "Mirror Move",
    "Dancer",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRules {
    pub copy_effects: &'static [&'static str],
    /// Species whose moves are always borrowed from its target
    pub transformer: &'static str,
    /// Move used when nothing else can be selected
    pub fallback: &'static str,
    /// Prefixes of transient dynamax moves
    pub max_prefixes: &'static [&'static str],
    /// Prefix of Z-powered status moves (`Z-Tailwind`)
    pub z_prefix: &'static str,
}

/// What happened to a recorded move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Recorded(String),
    Duplicate,
    /// Four moves are already known; the move was dropped
    Full(String),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Borrowed,
    Transformed,
    Fallback,
    MaxMove,
}

impl MoveRules {
    pub const STANDARD: MoveRules = MoveRules {
        copy_effects: COPY_EFFECTS,
        transformer: "Ditto",
        fallback: "Struggle",
        max_prefixes: &["Max ", "G-Max "],
        z_prefix: "Z-",
    };

    /// Whether a `[from]` annotation means the move was called by something else
    pub fn is_copy_effect(&self, from: &str) -> bool {
        let effect = from
            .strip_prefix("move: ")
            .or_else(|| from.strip_prefix("ability: "))
            .unwrap_or(from)
            .trim();
        self.copy_effects.iter().any(|copy| *copy == effect)
    }

    /// Strip empowered-variant prefixes to get the base move name
    pub fn base_move<'m>(&self, name: &'m str) -> &'m str {
        let name = name.trim();
        if self.z_prefix.is_empty() {
            return name;
        }
        name.strip_prefix(self.z_prefix).unwrap_or(name)
    }

    pub fn is_max_move(&self, name: &str) -> bool {
        self.max_prefixes.iter().any(|prefix| name.starts_with(prefix))
    }

    /// Record a move use for `combatant`, applying every skip rule.
    pub fn record(&self, combatant: &mut Combatant, name: &str, from: Option<&str>) -> MoveOutcome {
        if from.is_some_and(|from| self.is_copy_effect(from)) {
            return MoveOutcome::Skipped(SkipReason::Borrowed);
        }
        if combatant.species == self.transformer {
            return MoveOutcome::Skipped(SkipReason::Transformed);
        }

        let name = self.base_move(name);
        if name == self.fallback {
            return MoveOutcome::Skipped(SkipReason::Fallback);
        }
        if self.is_max_move(name) {
            return MoveOutcome::Skipped(SkipReason::MaxMove);
        }
        if combatant.knows_move(name) {
            return MoveOutcome::Duplicate;
        }
        if combatant.moves_full() {
            return MoveOutcome::Full(name.to_string());
        }

        combatant.push_move(name.to_string());
        MoveOutcome::Recorded(name.to_string())
    }
}

impl Default for MoveRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(combatant: &mut Combatant, name: &str) -> MoveOutcome {
        MoveRules::STANDARD.record(combatant, name, None)
    }

    #[test]
    fn test_records_in_order() {
        let mut pex = Combatant::new("Toxapex");

        record(&mut pex, "Scald");
        record(&mut pex, "Recover");

        assert_eq!(pex.moves(), &["Scald", "Recover"]);
    }

    #[test]
    fn test_duplicate_recorded_once() {
        let mut pex = Combatant::new("Toxapex");

        assert_eq!(record(&mut pex, "Scald"), MoveOutcome::Recorded("Scald".to_string()));
        assert_eq!(record(&mut pex, "Scald"), MoveOutcome::Duplicate);
        assert_eq!(pex.moves(), &["Scald"]);
    }

    #[test]
    fn test_fifth_move_dropped() {
        let mut mew = Combatant::new("Mew");
        for name in ["Psychic", "Will-O-Wisp", "Roost", "Taunt"] {
            record(&mut mew, name);
        }

        assert_eq!(record(&mut mew, "Spikes"), MoveOutcome::Full("Spikes".to_string()));
        assert_eq!(mew.moves().len(), 4);
        assert!(!mew.knows_move("Spikes"));
    }

    #[test]
    fn test_skipped_moves() {
        let mut koko = Combatant::new("Tapu Koko");

        assert_eq!(record(&mut koko, "Struggle"), MoveOutcome::Skipped(SkipReason::Fallback));
        assert_eq!(record(&mut koko, "Max Lightning"), MoveOutcome::Skipped(SkipReason::MaxMove));
        assert_eq!(record(&mut koko, "G-Max Volt Crash"), MoveOutcome::Skipped(SkipReason::MaxMove));
        assert!(koko.moves().is_empty());
    }

    #[test]
    fn test_z_prefix_normalized() {
        let mut koko = Combatant::new("Tapu Koko");

        record(&mut koko, "Z-Tailwind");
        assert_eq!(record(&mut koko, "Tailwind"), MoveOutcome::Duplicate);
        assert_eq!(koko.moves(), &["Tailwind"]);
    }

    #[test]
    fn test_borrowed_moves() {
        let mut liepard = Combatant::new("Liepard");
        let rules = MoveRules::STANDARD;

        assert_eq!(
            rules.record(&mut liepard, "Taunt", Some("Copycat")),
            MoveOutcome::Skipped(SkipReason::Borrowed)
        );
        assert_eq!(
            rules.record(&mut liepard, "Spikes", Some("ability: Magic Bounce")),
            MoveOutcome::Skipped(SkipReason::Borrowed)
        );
        assert_eq!(
            rules.record(&mut liepard, "Quiver Dance", Some("ability: Dancer")),
            MoveOutcome::Skipped(SkipReason::Borrowed)
        );
        assert!(liepard.moves().is_empty());

        // Other sources do not hide the move
        rules.record(&mut liepard, "Fake Out", Some("ability: Prankster"));
        assert_eq!(liepard.moves(), &["Fake Out"]);
    }

    #[test]
    fn test_transformer_moves_ignored() {
        let mut ditto = Combatant::new("Ditto");

        assert_eq!(record(&mut ditto, "Transform"), MoveOutcome::Skipped(SkipReason::Transformed));
        assert!(ditto.moves().is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let rules = MoveRules {
            copy_effects: &[],
            transformer: "Mew",
            fallback: "Splash",
            max_prefixes: &[],
            z_prefix: "",
        };
        let mut mew = Combatant::new("Mew");
        let mut pex = Combatant::new("Toxapex");

        assert_eq!(rules.record(&mut mew, "Psychic", None), MoveOutcome::Skipped(SkipReason::Transformed));
        assert_eq!(rules.record(&mut pex, "Splash", None), MoveOutcome::Skipped(SkipReason::Fallback));
        rules.record(&mut pex, "Struggle", Some("Copycat"));
        assert_eq!(pex.moves(), &["Struggle"]);
    }
}
