//! One side's reconstructed team

use indexmap::IndexMap;

use super::combatant::Combatant;

/// Outcome of the battle for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BattleResult {
    Win,
    Loss,
    /// No victory line was seen before the log ended
    #[default]
    Unresolved,
}

impl BattleResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            BattleResult::Win => "W",
            BattleResult::Loss => "L",
            BattleResult::Unresolved => "?",
        }
    }
}

/// The most recent dynamax of a side
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamaxEvent {
    /// Canonical species of the dynamaxed pokemon
    pub species: String,
    /// Turn counter when it happened (0 = before the first turn marker)
    pub turn: u32,
}

/// Everything learned about one side of a battle
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Pokemon keyed by their current nickname, in reveal order
    pub pokemons: IndexMap<String, Combatant>,

    /// Nickname of the pokemon that started the battle
    pub lead: Option<String>,

    pub result: BattleResult,

    /// Display name of the player controlling this side
    pub player: Option<String>,

    /// Team archetype, filled in by a classifier outside this crate
    pub archetype: Option<String>,

    pub dynamax: Option<DynamaxEvent>,

    /// Number of turns played, set when the winner is announced
    pub battle_length: Option<u32>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a pokemon by its current nickname
    pub fn combatant(&self, nickname: &str) -> Option<&Combatant> {
        self.pokemons.get(nickname)
    }

    pub fn combatant_mut(&mut self, nickname: &str) -> Option<&mut Combatant> {
        self.pokemons.get_mut(nickname)
    }

    /// Canonical species of every pokemon, in reveal order
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.pokemons.values().map(|c| c.species.as_str())
    }

    /// Species of the lead, falling back to its nickname if unknown
    pub fn lead_species(&self) -> Option<&str> {
        let lead = self.lead.as_deref()?;
        Some(
            self.pokemons
                .get(lead)
                .map(|c| c.species.as_str())
                .unwrap_or(lead),
        )
    }

    pub fn total_kills(&self) -> u32 {
        self.pokemons.values().map(|c| c.kills).sum()
    }

    pub fn total_deaths(&self) -> u32 {
        self.pokemons.values().map(|c| u32::from(c.deaths())).sum()
    }

    pub fn is_resolved(&self) -> bool {
        self.result != BattleResult::Unresolved
    }
}
