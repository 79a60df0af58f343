mod battle;
mod battle_init;
mod battle_major;
mod battle_minor;
mod battle_progress;
mod tests;

use anyhow::Result;

pub use battle::{Player, Pokemon, PokemonDetails};

/// One classified line of a battle log.
///
/// Only the tags that carry team information get their own variant; every
/// other line is kept verbatim as [`ServerMessage::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    // === Battle initialization ===
    /// `|player|PLAYER|USERNAME|AVATAR|RATING`
    BattlePlayer {
        player: Player,
        username: String,
        rating: Option<u32>,
    },
    /// `|poke|PLAYER|DETAILS|ITEM`
    Poke {
        player: Player,
        details: PokemonDetails,
        has_item: bool,
    },
    /// `|start`
    BattleStart,

    // === Battle progress ===
    Turn(u32),
    Win(String),
    Tie,

    // === Major actions ===
    Switch {
        pokemon: Pokemon,
        details: PokemonDetails,
    },
    Drag {
        pokemon: Pokemon,
        details: PokemonDetails,
    },
    DetailsChange {
        pokemon: Pokemon,
        details: PokemonDetails,
    },
    Move {
        pokemon: Pokemon,
        move_name: String,
        target: Option<Pokemon>,
        from: Option<String>,
        zeffect: bool,
        miss: bool,
        still: bool,
    },
    Cant {
        pokemon: Pokemon,
        reason: String,
        move_name: Option<String>,
    },
    Faint(Pokemon),

    // === Minor actions ===
    Damage {
        pokemon: Pokemon,
        from: Option<String>,
        of: Option<Pokemon>,
    },
    Heal {
        pokemon: Pokemon,
        from: Option<String>,
        of: Option<Pokemon>,
    },
    Status {
        pokemon: Pokemon,
        status: String,
        from: Option<String>,
        of: Option<Pokemon>,
    },
    Boost {
        pokemon: Pokemon,
        stat: String,
        amount: i8,
        from: Option<String>,
        of: Option<Pokemon>,
    },
    Unboost {
        pokemon: Pokemon,
        stat: String,
        amount: i8,
        from: Option<String>,
        of: Option<Pokemon>,
    },
    VolatileStart {
        pokemon: Pokemon,
        effect: String,
        from: Option<String>,
    },
    Item {
        pokemon: Pokemon,
        item: String,
        from: Option<String>,
    },
    EndItem {
        pokemon: Pokemon,
        item: String,
        from: Option<String>,
        eat: bool,
    },
    ZPower(Pokemon),

    Raw(String),
}

impl ServerMessage {
    /// The `[from]` annotation naming a held item, if this message has one.
    ///
    /// Only damage, heal, status and boost lines attribute effects this way.
    pub fn item_source(&self) -> Option<&str> {
        let from = match self {
            ServerMessage::Damage { from, .. }
            | ServerMessage::Heal { from, .. }
            | ServerMessage::Status { from, .. }
            | ServerMessage::Boost { from, .. }
            | ServerMessage::Unboost { from, .. } => from.as_deref()?,
            _ => return None,
        };
        from.strip_prefix("item: ").map(str::trim)
    }
}

/// Parse a single log line into a ServerMessage
///
/// Lines with an unknown tag are returned as [`ServerMessage::Raw`]. A line
/// with a known tag but missing or unreadable fields is an error.
pub fn parse_server_message(line: &str) -> Result<ServerMessage> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return Ok(ServerMessage::Raw(String::new()));
    }

    if !line.starts_with('|') {
        return Ok(ServerMessage::Raw(line.to_string()));
    }

    let parts: Vec<&str> = line.split('|').collect();

    if parts.len() < 2 {
        return Ok(ServerMessage::Raw(line.to_string()));
    }

    match parts[1] {
        "player" => battle_init::parse_player(&parts),
        "poke" => battle_init::parse_poke(&parts),
        "start" => battle_init::parse_start(&parts),

        "turn" => battle_progress::parse_turn(&parts),
        "win" => battle_progress::parse_win(&parts),
        "tie" => battle_progress::parse_tie(&parts),

        "switch" => battle_major::parse_switch(&parts),
        "drag" => battle_major::parse_drag(&parts),
        "detailschange" => battle_major::parse_detailschange(&parts),
        "move" => battle_major::parse_move(&parts),
        "cant" => battle_major::parse_cant(&parts),
        "faint" => battle_major::parse_faint(&parts),

        "-damage" => battle_minor::parse_damage(&parts),
        "-heal" => battle_minor::parse_heal(&parts),
        "-status" => battle_minor::parse_status(&parts),
        "-boost" => battle_minor::parse_boost(&parts),
        "-unboost" => battle_minor::parse_unboost(&parts),
        "-start" => battle_minor::parse_start(&parts),
        "-item" => battle_minor::parse_item(&parts),
        "-enditem" => battle_minor::parse_enditem(&parts),
        "-zpower" => battle_minor::parse_zpower(&parts),

        _ => Ok(ServerMessage::Raw(line.to_string())),
    }
}
