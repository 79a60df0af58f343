#[cfg(test)]
mod tests {
    use crate::{Player, Pokemon, PokemonDetails, ServerMessage, parse_server_message};

    fn pokemon(player: Player, name: &str) -> Pokemon {
        Pokemon {
            player,
            position: Some('a'),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_parse_unknown() {
        let line = "|someunknown|data";
        let message = parse_server_message(line).unwrap();

        assert_eq!(message, ServerMessage::Raw("|someunknown|data".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_server_message("").unwrap(), ServerMessage::Raw("".to_string()));
        assert_eq!(parse_server_message("|").unwrap(), ServerMessage::Raw("|".to_string()));
    }

    #[test]
    fn test_parse_player() {
        let message = parse_server_message("|player|p2|Bob|265|1420").unwrap();

        assert_eq!(
            message,
            ServerMessage::BattlePlayer {
                player: Player::P2,
                username: "Bob".to_string(),
                rating: Some(1420),
            }
        );
    }

    #[test]
    fn test_parse_player_third_side_rejected() {
        assert!(parse_server_message("|player|p3|Carol|1").is_err());
    }

    #[test]
    fn test_parse_poke() {
        let message = parse_server_message("|poke|p1|Landorus-Therian, M|item").unwrap();

        match message {
            ServerMessage::Poke {
                player,
                details,
                has_item,
            } => {
                assert_eq!(player, Player::P1);
                assert_eq!(details.species, "Landorus-Therian");
                assert_eq!(details.gender, Some('M'));
                assert!(has_item);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_parse_poke_missing_details() {
        assert!(parse_server_message("|poke|p1|").is_err());
    }

    #[test]
    fn test_parse_start_shapes() {
        assert_eq!(parse_server_message("|start").unwrap(), ServerMessage::BattleStart);
        assert_eq!(
            parse_server_message("|start|p1a: Dragapult|Dynamax").unwrap(),
            ServerMessage::VolatileStart {
                pokemon: pokemon(Player::P1, "Dragapult"),
                effect: "Dynamax".to_string(),
                from: None,
            }
        );
        assert_eq!(
            parse_server_message("|-start|p2a: Big Bird|Dynamax").unwrap(),
            ServerMessage::VolatileStart {
                pokemon: pokemon(Player::P2, "Big Bird"),
                effect: "Dynamax".to_string(),
                from: None,
            }
        );
    }

    #[test]
    fn test_parse_switch_with_nickname() {
        let message = parse_server_message("|switch|p1a: Lando|Landorus-Therian, L50, M|100/100").unwrap();

        assert_eq!(
            message,
            ServerMessage::Switch {
                pokemon: pokemon(Player::P1, "Lando"),
                details: PokemonDetails {
                    species: "Landorus-Therian".to_string(),
                    level: Some(50),
                    gender: Some('M'),
                    shiny: false,
                    tera_type: None,
                },
            }
        );
    }

    #[test]
    fn test_parse_drag() {
        let message = parse_server_message("|drag|p1a: Corv|Corviknight, M|100/100").unwrap();

        assert_eq!(
            message,
            ServerMessage::Drag {
                pokemon: pokemon(Player::P1, "Corv"),
                details: PokemonDetails {
                    species: "Corviknight".to_string(),
                    level: None,
                    gender: Some('M'),
                    shiny: false,
                    tera_type: None,
                },
            }
        );
        assert!(parse_server_message("|drag|p1a: Corv").is_err());
    }

    #[test]
    fn test_parse_switch_malformed() {
        assert!(parse_server_message("|switch|Lando|Landorus-Therian").is_err());
        assert!(parse_server_message("|switch|p1a: Lando").is_err());
    }

    #[test]
    fn test_parse_move_annotations() {
        let message = parse_server_message("|move|p1a: Liepard|Taunt||[from]Copycat|[still]").unwrap();

        match message {
            ServerMessage::Move {
                pokemon,
                move_name,
                target,
                from,
                zeffect,
                still,
                ..
            } => {
                assert_eq!(pokemon.name, "Liepard");
                assert_eq!(move_name, "Taunt");
                assert!(target.is_none());
                assert_eq!(from.as_deref(), Some("Copycat"));
                assert!(!zeffect);
                assert!(still);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_parse_move_zeffect() {
        let message =
            parse_server_message("|move|p1a: Tapu Koko|Z-Tailwind|p1a: Tapu Koko|[zeffect]").unwrap();

        assert!(matches!(message, ServerMessage::Move { zeffect: true, .. }));
    }

    #[test]
    fn test_parse_cant() {
        let message = parse_server_message("|cant|p2a: Clefable|move: Taunt|Stealth Rock").unwrap();
        assert_eq!(
            message,
            ServerMessage::Cant {
                pokemon: pokemon(Player::P2, "Clefable"),
                reason: "move: Taunt".to_string(),
                move_name: Some("Stealth Rock".to_string()),
            }
        );

        let message = parse_server_message("|cant|p2a: Clefable|par").unwrap();
        assert!(matches!(message, ServerMessage::Cant { move_name: None, .. }));
    }

    #[test]
    fn test_item_source_with_of() {
        let message =
            parse_server_message("|-damage|p2a: Garchomp|50/100|[from] item: Rocky Helmet|[of] p1a: Ferro")
                .unwrap();

        assert_eq!(message.item_source(), Some("Rocky Helmet"));
        match message {
            ServerMessage::Damage { of, .. } => assert_eq!(of, Some(pokemon(Player::P1, "Ferro"))),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_item_source_absent() {
        let message = parse_server_message("|-damage|p2a: Garchomp|50/100|[from] Stealth Rock").unwrap();
        assert_eq!(message.item_source(), None);

        let message = parse_server_message("|-boost|p1a: Hawlucha|atk|2|[from] item: Electric Seed").unwrap();
        assert_eq!(message.item_source(), Some("Electric Seed"));
    }

    #[test]
    fn test_parse_enditem() {
        let message = parse_server_message("|-enditem|p1a: Mew|Sitrus Berry|[eat]").unwrap();

        assert_eq!(
            message,
            ServerMessage::EndItem {
                pokemon: pokemon(Player::P1, "Mew"),
                item: "Sitrus Berry".to_string(),
                from: None,
                eat: true,
            }
        );
    }

    #[test]
    fn test_parse_win_requires_name() {
        assert_eq!(
            parse_server_message("|win|Alice").unwrap(),
            ServerMessage::Win("Alice".to_string())
        );
        assert!(parse_server_message("|win|").is_err());
    }
}
