//! Battle initialization message parsers
//!
//! These lines precede the first turn and announce players and team preview.

use super::ServerMessage;
use super::battle::{Player, Pokemon, parse_details};
use anyhow::Result;

/// Parse |player|PLAYER|USERNAME|AVATAR|RATING
pub fn parse_player(parts: &[&str]) -> Result<ServerMessage> {
    let player = parts
        .get(2)
        .and_then(|s| Player::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing player"))?;

    let username = parts.get(3).unwrap_or(&"").trim().to_string();
    let rating = parts.get(5).and_then(|s| s.parse().ok());

    Ok(ServerMessage::BattlePlayer {
        player,
        username,
        rating,
    })
}

/// Parse |poke|PLAYER|DETAILS|ITEM
pub fn parse_poke(parts: &[&str]) -> Result<ServerMessage> {
    let player = parts
        .get(2)
        .and_then(|s| Player::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing player"))?;

    let details = parse_details(parts, 3)?;
    let has_item = parts.get(4).map(|s| *s == "item").unwrap_or(false);

    Ok(ServerMessage::Poke {
        player,
        details,
        has_item,
    })
}

/// Parse |start
///
/// Some logs announce a dynamax on a start line of the form
/// `|start|POKEMON|...|Dynamax`; that shape is reported as a volatile start.
pub fn parse_start(parts: &[&str]) -> Result<ServerMessage> {
    if parts.last().map(|s| s.trim()) == Some("Dynamax")
        && let Some(pokemon) = parts.get(2).and_then(|s| Pokemon::parse(s))
    {
        return Ok(ServerMessage::VolatileStart {
            pokemon,
            effect: "Dynamax".to_string(),
            from: None,
        });
    }

    Ok(ServerMessage::BattleStart)
}
