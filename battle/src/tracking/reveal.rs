//! Whole-log checks for forms team preview cannot show
//!
//! Team preview lists a Battle Bond Greninja as plain "Greninja". The log
//! gives it away later: it either transforms into Greninja-Ash, or it attacks
//! without ever triggering Protean.

use tally_protocol::{Player, ServerMessage, parse_server_message};

pub const GRENINJA: &str = "Greninja";
pub const ASH_GRENINJA: &str = "Greninja-Ash";

/// Species to record for a Greninja announced in preview
pub fn greninja_form(lines: &[&str], player: Player) -> &'static str {
    let nickname = switch_nickname(lines, player, GRENINJA).unwrap_or_else(|| GRENINJA.to_string());
    if is_battle_bond(lines, player, &nickname) {
        ASH_GRENINJA
    } else {
        GRENINJA
    }
}

/// Nickname under which `species` first switched in for `player`
fn switch_nickname(lines: &[&str], player: Player, species: &str) -> Option<String> {
    messages(lines).find_map(|msg| match msg {
        ServerMessage::Switch { pokemon, details }
            if pokemon.player == player && details.species == species =>
        {
            Some(pokemon.name)
        }
        _ => None,
    })
}

fn is_battle_bond(lines: &[&str], player: Player, nickname: &str) -> bool {
    let mut transformed = false;
    let mut protean = false;
    let mut attacked = false;

    for msg in messages(lines) {
        match msg {
            ServerMessage::DetailsChange { pokemon, details }
                if pokemon.player == player && pokemon.name == nickname =>
            {
                transformed |= details.species == ASH_GRENINJA;
            }
            ServerMessage::VolatileStart {
                pokemon,
                effect,
                from,
            } if pokemon.player == player && pokemon.name == nickname => {
                protean |= effect == "typechange"
                    && from.as_deref().is_some_and(|f| f.ends_with("Protean"));
            }
            ServerMessage::Move { pokemon, .. }
                if pokemon.player == player && pokemon.name == nickname =>
            {
                attacked = true;
            }
            _ => {}
        }
    }

    transformed || (attacked && !protean)
}

fn messages<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = ServerMessage> + 'a {
    lines
        .iter()
        .filter_map(|line| parse_server_message(line).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(log: &str) -> Vec<&str> {
        log.lines().collect()
    }

    #[test]
    fn test_detailschange_reveals_ash() {
        let log = lines(
            "|switch|p1a: Frog|Greninja, M|100/100\n\
             |move|p1a: Frog|Dark Pulse|p2a: Mew\n\
             |detailschange|p1a: Frog|Greninja-Ash, M",
        );

        assert_eq!(greninja_form(&log, Player::P1), ASH_GRENINJA);
    }

    #[test]
    fn test_protean_means_regular() {
        let log = lines(
            "|switch|p1a: Frog|Greninja, M|100/100\n\
             |-start|p1a: Frog|typechange|Dark|[from] ability: Protean\n\
             |move|p1a: Frog|Dark Pulse|p2a: Mew",
        );

        assert_eq!(greninja_form(&log, Player::P1), GRENINJA);
    }

    #[test]
    fn test_attack_without_protean_means_ash() {
        let log = lines(
            "|switch|p2a: Greninja|Greninja, M|100/100\n\
             |move|p2a: Greninja|Water Shuriken|p1a: Mew",
        );

        assert_eq!(greninja_form(&log, Player::P2), ASH_GRENINJA);
        assert_eq!(greninja_form(&log, Player::P1), GRENINJA);
    }

    #[test]
    fn test_never_acted_means_regular() {
        let log = lines("|switch|p1a: Frog|Greninja, M|100/100\n|faint|p1a: Frog");

        assert_eq!(greninja_form(&log, Player::P1), GRENINJA);
    }
}
