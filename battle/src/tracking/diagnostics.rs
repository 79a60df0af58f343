//! Per-line problems found while reading a log
//!
//! None of these stop a parse. They are collected so a caller can tell a
//! clean log from one that was read on a best-effort basis.

use tally_protocol::Player;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    /// A known tag whose fields could not be read
    #[error("malformed line: {0}")]
    Malformed(String),

    /// A line referred to a pokemon that was never introduced; one was created
    #[error("unknown pokemon {nickname:?} on {player}, added to the team")]
    UnknownPokemon { player: Player, nickname: String },

    /// A faint happened while the opposing side had nobody on the field
    #[error("no active pokemon on {player} to credit the faint of {fainted:?}")]
    NoOpponentOnField { player: Player, fainted: String },

    #[error("{nickname:?} on {player} fainted twice")]
    RepeatFaint { player: Player, nickname: String },

    /// A fifth distinct move for one pokemon
    #[error("{nickname:?} on {player} already knows four moves, dropped {move_name:?}")]
    MoveListFull {
        player: Player,
        nickname: String,
        move_name: String,
    },

    /// A line that needs the following line(s) did not find what it expected
    #[error("expected {expected} after this line")]
    MissingLookAhead { expected: &'static str },

    #[error("winner {0:?} is not one of the players")]
    UnknownWinner(String),
}

/// A problem tied to one line of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub kind: AnomalyKind,
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.kind, self.text)
    }
}
