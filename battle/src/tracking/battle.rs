//! BattleParser - reads one battle log into two teams

use std::collections::HashMap;

use tally_protocol::{Player, parse_server_message};

use super::cursor::{Line, LineCursor};
use super::diagnostics::{Anomaly, AnomalyKind};
use super::identity::{IdentityResolver, Resolution};
use super::moves::MoveRules;
use crate::LogError;
use crate::types::{BattleResult, Combatant, SpeciesTable, Team};

/// The fixed lookup tables used while reading a log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserTables {
    pub species: SpeciesTable,
    pub identity: IdentityResolver,
    pub moves: MoveRules,
}

impl ParserTables {
    pub const STANDARD: ParserTables = ParserTables {
        species: SpeciesTable::STANDARD,
        identity: IdentityResolver::STANDARD,
        moves: MoveRules::STANDARD,
    };
}

/// Both teams of one battle, plus whatever went wrong while reading it
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBattle {
    /// Indexed by [`Player::index`]
    pub teams: [Team; 2],

    /// Turn markers seen
    pub turns: u32,

    pub diagnostics: Vec<Anomaly>,
}

impl ParsedBattle {
    pub fn team(&self, player: Player) -> &Team {
        &self.teams[player.index()]
    }

    pub fn team_mut(&mut self, player: Player) -> &mut Team {
        &mut self.teams[player.index()]
    }

    /// The side that won, if a winner was announced
    pub fn winner(&self) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|p| self.team(*p).result == BattleResult::Win)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Single-pass interpreter over a battle log
///
/// Each line is classified with the protocol parser and applied to the two
/// teams. Reading stops at the first `|win|` line.
#[derive(Debug, Clone)]
pub struct BattleParser {
    pub(crate) tables: ParserTables,

    pub(crate) teams: [Team; 2],

    /// Incremented on every `|turn|` line
    pub(crate) turn: u32,

    /// Nickname of the pokemon currently on the field, per side
    pub(crate) occupants: [Option<String>; 2],

    /// Player display name to side
    pub(crate) players: HashMap<String, Player>,

    /// Set once the winner is known
    pub(crate) resolved: bool,

    pub(crate) diagnostics: Vec<Anomaly>,
}

impl BattleParser {
    pub fn new() -> Self {
        Self::with_tables(ParserTables::STANDARD)
    }

    pub fn with_tables(tables: ParserTables) -> Self {
        Self {
            tables,
            teams: [Team::new(), Team::new()],
            turn: 0,
            occupants: [None, None],
            players: HashMap::new(),
            resolved: false,
            diagnostics: Vec::new(),
        }
    }

    /// Read a whole log and return both teams.
    ///
    /// Only an empty log is an error; problems with individual lines end up
    /// in [`ParsedBattle::diagnostics`].
    pub fn parse(mut self, log: &str) -> Result<ParsedBattle, LogError> {
        if log.trim().is_empty() {
            return Err(LogError::Empty);
        }

        let mut cursor = LineCursor::new(log);
        while let Some(line) = cursor.next_line() {
            match parse_server_message(line.text) {
                Ok(msg) => self.update(&msg, line, &mut cursor),
                Err(e) => self.report(line, AnomalyKind::Malformed(format!("{e:#}"))),
            }

            if self.resolved {
                tracing::trace!(line = line.number, "winner announced, stopping");
                break;
            }
        }

        Ok(self.finish())
    }

    pub fn finish(self) -> ParsedBattle {
        ParsedBattle {
            teams: self.teams,
            turns: self.turn,
            diagnostics: self.diagnostics,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn team(&self, player: Player) -> &Team {
        &self.teams[player.index()]
    }

    pub fn team_mut(&mut self, player: Player) -> &mut Team {
        &mut self.teams[player.index()]
    }

    /// Nickname of the pokemon on the field for `player`
    pub fn occupant(&self, player: Player) -> Option<&str> {
        self.occupants[player.index()].as_deref()
    }

    pub fn diagnostics(&self) -> &[Anomaly] {
        &self.diagnostics
    }

    pub(crate) fn report(&mut self, line: Line<'_>, kind: AnomalyKind) {
        tracing::warn!(line = line.number, text = line.text, "{kind}");
        self.diagnostics.push(Anomaly {
            line: line.number,
            text: line.text.to_string(),
            kind,
        });
    }

    /// The pokemon for `nickname`, created (and reported) if it was never introduced
    pub(crate) fn combatant_or_insert(
        &mut self,
        player: Player,
        nickname: &str,
        line: Line<'_>,
    ) -> &mut Combatant {
        if !self.team(player).pokemons.contains_key(nickname) {
            self.report(
                line,
                AnomalyKind::UnknownPokemon {
                    player,
                    nickname: nickname.to_string(),
                },
            );
            let species = self.tables.species.canonicalize(nickname);
            let identity = self.tables.identity;
            let (_, resolution) = identity.resolve(self.team_mut(player), nickname, &species);
            if let Resolution::Merged { previous } = resolution {
                self.retarget_occupant(player, &previous, nickname);
            }
        }

        self.team_mut(player)
            .pokemons
            .entry(nickname.to_string())
            .or_insert_with(|| Combatant::new(nickname))
    }

    /// Follow a rename if the renamed pokemon is the one on the field
    pub(crate) fn retarget_occupant(&mut self, player: Player, previous: &str, nickname: &str) {
        let occupant = &mut self.occupants[player.index()];
        if occupant.as_deref() == Some(previous) {
            *occupant = Some(nickname.to_string());
        }
    }
}

impl Default for BattleParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parser() {
        let parser = BattleParser::new();
        assert_eq!(parser.turn(), 0);
        assert!(!parser.is_resolved());
        assert!(parser.occupant(Player::P1).is_none());
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_log_is_error() {
        assert!(matches!(BattleParser::new().parse(""), Err(LogError::Empty)));
        assert!(matches!(BattleParser::new().parse("\n \n"), Err(LogError::Empty)));
    }

    #[test]
    fn test_unknown_lines_ignored() {
        let parsed = BattleParser::new()
            .parse("|j|☆Alice\n|c|☆Alice|glhf\n|t:|1600000000\n|gametype|singles")
            .unwrap();

        assert!(parsed.is_clean());
        assert!(parsed.teams.iter().all(|t| t.pokemons.is_empty()));
        assert_eq!(parsed.winner(), None);
    }

    #[test]
    fn test_combatant_or_insert_reports() {
        let mut parser = BattleParser::new();
        let line = Line {
            number: 7,
            text: "|faint|p2a: Ghost",
        };

        parser.combatant_or_insert(Player::P2, "Ghost", line).kills = 1;
        parser.combatant_or_insert(Player::P2, "Ghost", line).kills += 1;

        assert_eq!(parser.team(Player::P2).pokemons["Ghost"].kills, 2);
        assert_eq!(parser.diagnostics().len(), 1);
        assert_eq!(parser.diagnostics()[0].line, 7);
    }
}
