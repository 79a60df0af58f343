//! Shared types for battle log lines

use crate::ParseError;

/// One of the two sides of a battle (p1, p2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::P1, Player::P2];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// The other side of the battle
    pub fn opponent(&self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Array index for per-side storage
    pub fn index(&self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pokemon identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    /// Player who owns this pokemon
    pub player: Player,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Nickname as shown in the log
    pub name: String,
}

impl Pokemon {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let player = Player::parse(pos_part.get(..2)?)?;
        let position = pos_part.chars().nth(2);

        if name.is_empty() {
            return None;
        }

        Some(Pokemon {
            player,
            position,
            name: name.to_string(),
        })
    }
}

/// Pokemon details string (species, level, gender, shiny, tera)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
    pub tera_type: Option<String>,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M, shiny" or "Silvally-*"
    pub fn parse(s: &str) -> Self {
        let mut parts = s.split(',').map(str::trim);
        let mut details = PokemonDetails {
            species: parts.next().unwrap_or_default().to_string(),
            ..Default::default()
        };

        for part in parts {
            match part {
                "M" => details.gender = Some('M'),
                "F" => details.gender = Some('F'),
                "shiny" => details.shiny = true,
                _ => {
                    if let Some(level) = part.strip_prefix('L') {
                        details.level = level.parse().ok();
                    } else if let Some(tera) = part.strip_prefix("tera:") {
                        details.tera_type = Some(tera.to_string());
                    }
                }
            }
        }

        details
    }
}

/// Helper to parse Pokemon from message parts
pub fn parse_pokemon(parts: &[&str], index: usize) -> Result<Pokemon, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| Pokemon::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()).into())
}

/// Helper to parse PokemonDetails from message parts
///
/// The species is mandatory: a details field without one is malformed.
pub fn parse_details(parts: &[&str], index: usize) -> Result<PokemonDetails, anyhow::Error> {
    let details = parts
        .get(index)
        .map(|s| PokemonDetails::parse(s))
        .ok_or_else(|| ParseError::MissingField("details".to_string()))?;

    if details.species.is_empty() {
        return Err(ParseError::InvalidFormat("details without species".to_string()).into());
    }

    Ok(details)
}

/// Find the `[from]` annotation among trailing parts
///
/// Both `[from] item: Leftovers` and `[from]Copycat` are accepted.
pub fn find_from(parts: &[&str], start: usize) -> Option<String> {
    parts
        .iter()
        .skip(start)
        .find_map(|p| p.strip_prefix("[from]"))
        .map(|s| s.trim().to_string())
}

/// Find the `[of]` annotation among trailing parts
pub fn find_of(parts: &[&str], start: usize) -> Option<Pokemon> {
    parts
        .iter()
        .skip(start)
        .find_map(|p| p.strip_prefix("[of]"))
        .and_then(|s| Pokemon::parse(s.trim()))
}

/// Check for a bare flag such as `[zeffect]` or `[still]`
pub fn has_flag(parts: &[&str], start: usize, flag: &str) -> bool {
    parts.iter().skip(start).any(|p| p.trim() == flag)
}
