//! Major battle action message parsers
//!
//! These are the primary actions in battle: moves, switches, faints, etc.

use super::ServerMessage;
use super::battle::{Pokemon, find_from, has_flag, parse_details, parse_pokemon};
use crate::ParseError;
use anyhow::Result;

/// Parse |move|POKEMON|MOVE|TARGET with optional tags
pub fn parse_move(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let move_name = parts
        .get(3)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("move".to_string()))?
        .to_string();
    let target = parts.get(4).and_then(|s| Pokemon::parse(s));

    Ok(ServerMessage::Move {
        pokemon,
        move_name,
        target,
        from: find_from(parts, 4),
        zeffect: has_flag(parts, 4, "[zeffect]"),
        miss: has_flag(parts, 4, "[miss]"),
        still: has_flag(parts, 4, "[still]"),
    })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS
pub fn parse_switch(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3)?;

    Ok(ServerMessage::Switch { pokemon, details })
}

/// Parse |drag|POKEMON|DETAILS|HP STATUS
pub fn parse_drag(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3)?;

    Ok(ServerMessage::Drag { pokemon, details })
}

/// Parse |detailschange|POKEMON|DETAILS|HP STATUS
pub fn parse_detailschange(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3)?;

    Ok(ServerMessage::DetailsChange { pokemon, details })
}

/// Parse |cant|POKEMON|REASON or |cant|POKEMON|REASON|MOVE
pub fn parse_cant(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let reason = parts.get(3).unwrap_or(&"").to_string();
    let move_name = parts
        .get(4)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(ServerMessage::Cant {
        pokemon,
        reason,
        move_name,
    })
}

/// Parse |faint|POKEMON
pub fn parse_faint(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(ServerMessage::Faint(pokemon))
}
