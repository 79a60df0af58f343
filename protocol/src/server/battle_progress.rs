//! Battle progress message parsers
//!
//! These messages track the flow of a battle.

use super::ServerMessage;
use crate::ParseError;
use anyhow::Result;

/// Parse |turn|NUMBER
pub fn parse_turn(parts: &[&str]) -> Result<ServerMessage> {
    let turn = parts
        .get(2)
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing turn number"))?;

    Ok(ServerMessage::Turn(turn))
}

/// Parse |win|USER
pub fn parse_win(parts: &[&str]) -> Result<ServerMessage> {
    let user = parts.get(2).map(|s| s.trim()).unwrap_or_default();
    if user.is_empty() {
        return Err(ParseError::MissingField("winner".to_string()).into());
    }

    Ok(ServerMessage::Win(user.to_string()))
}

/// Parse |tie
pub fn parse_tie(_parts: &[&str]) -> Result<ServerMessage> {
    Ok(ServerMessage::Tie)
}
