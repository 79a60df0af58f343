//! Minor battle action message parsers
//!
//! Secondary effects in battle. Most of them only matter here because a
//! `[from] item: ...` annotation reveals a held item.

use super::ServerMessage;
use super::battle::{Pokemon, find_from, find_of, has_flag, parse_pokemon};
use anyhow::Result;

/// Parse |-damage|POKEMON|HP STATUS with optional [from]EFFECT|[of]SOURCE
pub fn parse_damage(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;

    Ok(ServerMessage::Damage {
        pokemon,
        from: find_from(parts, 4),
        of: find_of(parts, 4),
    })
}

/// Parse |-heal|POKEMON|HP STATUS with optional [from]EFFECT|[of]SOURCE
pub fn parse_heal(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;

    Ok(ServerMessage::Heal {
        pokemon,
        from: find_from(parts, 4),
        of: find_of(parts, 4),
    })
}

/// Parse |-status|POKEMON|STATUS with optional [from]EFFECT|[of]SOURCE
pub fn parse_status(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let status = parts.get(3).unwrap_or(&"").to_string();

    Ok(ServerMessage::Status {
        pokemon,
        status,
        from: find_from(parts, 4),
        of: find_of(parts, 4),
    })
}

/// Parse |-boost|POKEMON|STAT|AMOUNT with optional [from]EFFECT
pub fn parse_boost(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, stat, amount) = parse_stat_change(parts)?;

    Ok(ServerMessage::Boost {
        pokemon,
        stat,
        amount,
        from: find_from(parts, 5),
        of: find_of(parts, 5),
    })
}

/// Parse |-unboost|POKEMON|STAT|AMOUNT with optional [from]EFFECT
pub fn parse_unboost(parts: &[&str]) -> Result<ServerMessage> {
    let (pokemon, stat, amount) = parse_stat_change(parts)?;

    Ok(ServerMessage::Unboost {
        pokemon,
        stat,
        amount,
        from: find_from(parts, 5),
        of: find_of(parts, 5),
    })
}

fn parse_stat_change(parts: &[&str]) -> Result<(Pokemon, String, i8)> {
    let pokemon = parse_pokemon(parts, 2)?;
    let stat = parts
        .get(3)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Missing stat"))?
        .to_string();
    let amount = parts
        .get(4)
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing amount"))?;

    Ok((pokemon, stat, amount))
}

/// Parse |-start|POKEMON|EFFECT
pub fn parse_start(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let effect = parts.get(3).unwrap_or(&"").trim().to_string();

    Ok(ServerMessage::VolatileStart {
        pokemon,
        effect,
        from: find_from(parts, 4),
    })
}

/// Parse |-item|POKEMON|ITEM with optional [from]EFFECT
pub fn parse_item(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let item = parts
        .get(3)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Missing item"))?
        .to_string();

    Ok(ServerMessage::Item {
        pokemon,
        item,
        from: find_from(parts, 4),
    })
}

/// Parse |-enditem|POKEMON|ITEM with optional [from]EFFECT or [eat]
pub fn parse_enditem(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    let item = parts
        .get(3)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Missing item"))?
        .to_string();

    Ok(ServerMessage::EndItem {
        pokemon,
        item,
        from: find_from(parts, 4),
        eat: has_flag(parts, 4, "[eat]"),
    })
}

/// Parse |-zpower|POKEMON
pub fn parse_zpower(parts: &[&str]) -> Result<ServerMessage> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(ServerMessage::ZPower(pokemon))
}
