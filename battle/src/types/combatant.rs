//! Per-pokemon statistics

/// Most moves a pokemon can know
pub const MAX_MOVES: usize = 4;

/// One distinct pokemon on a team, with the statistics gathered for it.
///
/// The nickname is not stored here: it is the key under which the combatant
/// lives in [`Team::pokemons`](super::Team::pokemons).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Canonical species (including a meaningful forme, e.g. "Landorus-Therian")
    pub species: String,

    /// Moves in the order they were first seen, at most [`MAX_MOVES`]
    moves: Vec<String>,

    /// Last known held item
    pub item: Option<String>,

    /// Opposing faints attributed to this pokemon
    pub kills: u32,

    /// 0 or 1
    deaths: u8,

    /// Times this pokemon entered the field
    pub entrances: u32,
}

impl Combatant {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Default::default()
        }
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn knows_move(&self, name: &str) -> bool {
        self.moves.iter().any(|m| m == name)
    }

    pub fn moves_full(&self) -> bool {
        self.moves.len() >= MAX_MOVES
    }

    /// Append a move; callers go through the move ledger, which checks
    /// duplicates and capacity first.
    pub(crate) fn push_move(&mut self, name: String) {
        debug_assert!(!self.moves_full() && !self.knows_move(&name));
        self.moves.push(name);
    }

    pub fn deaths(&self) -> u8 {
        self.deaths
    }

    pub fn fainted(&self) -> bool {
        self.deaths > 0
    }

    /// Record a faint. Returns false if this pokemon had already fainted.
    pub fn record_faint(&mut self) -> bool {
        if self.fainted() {
            return false;
        }
        self.deaths = 1;
        true
    }
}
