//! Team reconstruction from Pokemon Showdown battle logs.
//!
//! This crate reads one battle log top to bottom and rebuilds both teams:
//! which species were brought, which moves and items each pokemon showed,
//! who scored kills, who led and who won.
//!
//! # Overview
//!
//! `tally-battle` sits between `tally-protocol` (line classification) and the
//! batch driver:
//!
//! ```text
//! tally-protocol (line format)
//!        │
//!        ▼
//! tally-battle (teams + parser) ← THIS CRATE
//!        │
//!        └─> tally-replay (many logs in parallel)
//! ```
//!
//! # Main Types
//!
//! ## Output Model
//! - [`Team`] - One side's roster, lead, result and dynamax
//! - [`Combatant`] - Statistics for one pokemon
//! - [`BattleResult`] - Win, loss or unresolved
//!
//! ## Parsing
//! - [`BattleParser`] - Single-pass interpreter over a log
//! - [`ParsedBattle`] - Both teams plus per-line [`Anomaly`] diagnostics
//! - [`SpeciesTable`], [`IdentityResolver`], [`MoveRules`] - The fixed tables
//!   the parser consults, replaceable through [`ParserTables`]
//!
//! # Example Usage
//!
//! ```
//! use tally_battle::{BattleResult, Player, parse_log};
//!
//! let log = "\
//! |player|p1|Alice|1|
//! |player|p2|Bob|2|
//! |poke|p1|Toxapex, F|
//! |poke|p2|Garchomp, M|
//! |start
//! |switch|p1a: Toxapex|Toxapex, F|100/100
//! |switch|p2a: Chomp|Garchomp, M|100/100
//! |turn|1
//! |move|p2a: Chomp|Earthquake|p1a: Toxapex
//! |win|Bob";
//!
//! let battle = parse_log(log).unwrap();
//! let bob = battle.team(Player::P2);
//!
//! assert_eq!(bob.result, BattleResult::Win);
//! assert_eq!(bob.pokemons["Chomp"].species, "Garchomp");
//! assert_eq!(bob.pokemons["Chomp"].moves(), &["Earthquake"]);
//! ```

pub mod tracking;
pub mod types;

use thiserror::Error;

// Re-export main types at crate root for convenience
pub use tracking::{
    Anomaly, AnomalyKind, BattleParser, IdentityResolver, MoveRules, ParsedBattle, ParserTables,
};
pub use types::{BattleResult, Combatant, DynamaxEvent, MAX_MOVES, SpeciesTable, Team, canonicalize};

// Re-export commonly used protocol types
pub use tally_protocol::Player;

/// Errors that fail a whole log
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("log is empty")]
    Empty,
}

/// Parse one log with the standard tables
pub fn parse_log(log: &str) -> Result<ParsedBattle, LogError> {
    BattleParser::new().parse(log)
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_team_serializes() {
        let mut team = Team::new();
        let mut pex = Combatant::new("Toxapex");
        pex.item = Some("Black Sludge".to_string());
        team.pokemons.insert("Pex".to_string(), pex);
        team.result = BattleResult::Win;

        let json = serde_json::to_value(&team).unwrap();

        assert_eq!(json["result"], "win");
        assert_eq!(json["pokemons"]["Pex"]["species"], "Toxapex");
        assert_eq!(json["pokemons"]["Pex"]["item"], "Black Sludge");

        let back: Team = serde_json::from_value(json).unwrap();
        assert_eq!(back, team);
    }
}
