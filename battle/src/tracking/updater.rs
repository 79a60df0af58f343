//! Update logic for applying log lines to the two teams

use tally_protocol::{Player, Pokemon, ServerMessage, parse_server_message};

use super::battle::BattleParser;
use super::cursor::{Line, LineCursor};
use super::diagnostics::AnomalyKind;
use super::identity::Resolution;
use super::moves::MoveOutcome;
use super::reveal::{GRENINJA, greninja_form};
use crate::types::{BattleResult, DynamaxEvent};

/// Lines read after `|start` for the two leads
const LEAD_LINES: usize = 2;

impl BattleParser {
    /// Apply one classified line. `cursor` is positioned just after `line`.
    pub(crate) fn update(&mut self, msg: &ServerMessage, line: Line<'_>, cursor: &mut LineCursor<'_>) {
        if let (Some(item), Some(holder)) = (msg.item_source(), item_holder(msg)) {
            self.set_item(holder, item, line);
        }

        match msg {
            ServerMessage::Turn(_) => {
                self.turn += 1;
            }

            ServerMessage::BattlePlayer {
                player, username, ..
            } => {
                self.handle_player(*player, username);
            }

            ServerMessage::Poke {
                player, details, ..
            } => {
                self.handle_poke(*player, &details.species, cursor);
            }

            ServerMessage::BattleStart => {
                self.handle_start(line, cursor);
            }

            ServerMessage::VolatileStart {
                pokemon, effect, ..
            } if effect == "Dynamax" => {
                self.handle_dynamax(pokemon, line);
            }

            ServerMessage::Item { pokemon, item, .. } | ServerMessage::EndItem { pokemon, item, .. } => {
                self.set_item(pokemon, item, line);
            }

            ServerMessage::Win(name) => {
                self.handle_win(name, line);
            }

            ServerMessage::Switch { pokemon, details } | ServerMessage::Drag { pokemon, details } => {
                self.handle_switch(pokemon, &details.species);
            }

            ServerMessage::Faint(pokemon) => {
                self.handle_faint(pokemon, line);
            }

            ServerMessage::DetailsChange { pokemon, details } => {
                let species = self.tables.species.canonicalize(&details.species);
                let combatant = self.combatant_or_insert(pokemon.player, &pokemon.name, line);
                tracing::debug!(nickname = %pokemon.name, from = %combatant.species, to = %species, "forme change");
                combatant.species = species;
            }

            ServerMessage::Move {
                pokemon,
                move_name,
                from,
                zeffect,
                ..
            } => {
                // The status move behind a Z-effect is logged again without the tag
                if !*zeffect {
                    self.record_move(pokemon, move_name, from.as_deref(), line);
                }
            }

            ServerMessage::Cant {
                pokemon,
                move_name: Some(move_name),
                ..
            } => {
                self.record_move(pokemon, move_name, None, line);
            }

            ServerMessage::ZPower(_) => {
                self.handle_zpower(line, cursor);
            }

            _ => {}
        }
    }

    fn handle_player(&mut self, player: Player, username: &str) {
        if username.is_empty() {
            return;
        }

        self.players.entry(username.to_string()).or_insert(player);
        let team = self.team_mut(player);
        if team.player.is_none() {
            team.player = Some(username.to_string());
        }
    }

    fn handle_poke(&mut self, player: Player, species: &str, cursor: &LineCursor<'_>) {
        let mut species = self.tables.species.canonicalize(species);
        if species == GRENINJA {
            species = greninja_form(cursor.lines(), player).to_string();
        }

        let identity = self.tables.identity;
        identity.reveal(self.team_mut(player), &species);
    }

    /// Consume the switch lines that follow `|start` as the two leads
    fn handle_start(&mut self, line: Line<'_>, cursor: &mut LineCursor<'_>) {
        for _ in 0..LEAD_LINES {
            let lead = cursor
                .peek(1)
                .and_then(|next| parse_server_message(next.text).ok());

            let Some(ServerMessage::Switch { pokemon, details }) = lead else {
                self.report(line, AnomalyKind::MissingLookAhead { expected: "a lead switch" });
                return;
            };

            cursor.advance();
            self.handle_switch(&pokemon, &details.species);
        }
    }

    fn handle_switch(&mut self, pokemon: &Pokemon, species: &str) {
        let player = pokemon.player;
        let nickname = pokemon.name.as_str();

        if let Some(combatant) = self.team_mut(player).combatant_mut(nickname) {
            combatant.entrances += 1;
        } else {
            let species = self.tables.species.canonicalize(species);
            let identity = self.tables.identity;
            let (combatant, resolution) = identity.resolve(self.team_mut(player), nickname, &species);
            combatant.entrances += 1;
            if let Resolution::Created = resolution {
                tracing::debug!(%player, %nickname, %species, "switched in without preview");
            }
        }

        let team = self.team_mut(player);
        if team.lead.is_none() {
            team.lead = Some(nickname.to_string());
        }
        self.occupants[player.index()] = Some(nickname.to_string());
    }

    fn handle_dynamax(&mut self, pokemon: &Pokemon, line: Line<'_>) {
        let species = self
            .combatant_or_insert(pokemon.player, &pokemon.name, line)
            .species
            .clone();
        let turn = self.turn;

        tracing::debug!(player = %pokemon.player, %species, turn, "dynamax");
        self.team_mut(pokemon.player).dynamax = Some(DynamaxEvent { species, turn });
    }

    fn set_item(&mut self, pokemon: &Pokemon, item: &str, line: Line<'_>) {
        self.combatant_or_insert(pokemon.player, &pokemon.name, line).item = Some(item.to_string());
    }

    fn handle_win(&mut self, name: &str, line: Line<'_>) {
        let Some(&winner) = self.players.get(name.trim()) else {
            self.report(line, AnomalyKind::UnknownWinner(name.to_string()));
            return;
        };

        let turns = self.turn;
        self.team_mut(winner).result = BattleResult::Win;
        self.team_mut(winner.opponent()).result = BattleResult::Loss;
        for team in &mut self.teams {
            team.battle_length = Some(turns);
        }

        tracing::debug!(%winner, turns, "battle resolved");
        self.resolved = true;
    }

    fn handle_faint(&mut self, pokemon: &Pokemon, line: Line<'_>) {
        let player = pokemon.player;
        if !self.combatant_or_insert(player, &pokemon.name, line).record_faint() {
            self.report(
                line,
                AnomalyKind::RepeatFaint {
                    player,
                    nickname: pokemon.name.clone(),
                },
            );
            return;
        }

        let opponent = player.opponent();
        if let Some(occupant) = self.occupants[opponent.index()].clone()
            && let Some(killer) = self.team_mut(opponent).combatant_mut(&occupant)
        {
            killer.kills += 1;
            return;
        }

        self.report(
            line,
            AnomalyKind::NoOpponentOnField {
                player: opponent,
                fainted: pokemon.name.clone(),
            },
        );
    }

    fn record_move(&mut self, pokemon: &Pokemon, move_name: &str, from: Option<&str>, line: Line<'_>) {
        let rules = self.tables.moves;
        let outcome = rules.record(
            self.combatant_or_insert(pokemon.player, &pokemon.name, line),
            move_name,
            from,
        );

        match outcome {
            MoveOutcome::Full(move_name) => self.report(
                line,
                AnomalyKind::MoveListFull {
                    player: pokemon.player,
                    nickname: pokemon.name.clone(),
                    move_name,
                },
            ),
            MoveOutcome::Skipped(reason) => {
                tracing::trace!(nickname = %pokemon.name, %move_name, ?reason, "move not recorded");
            }
            MoveOutcome::Recorded(_) | MoveOutcome::Duplicate => {}
        }
    }

    /// `|-zpower|` is followed by the Z-move itself; its name is kept as the item
    fn handle_zpower(&mut self, line: Line<'_>, cursor: &mut LineCursor<'_>) {
        let next = cursor
            .peek(1)
            .and_then(|next| parse_server_message(next.text).ok());

        let Some(ServerMessage::Move {
            pokemon, move_name, ..
        }) = next
        else {
            self.report(line, AnomalyKind::MissingLookAhead { expected: "a Z-move" });
            return;
        };

        cursor.advance();
        self.set_item(&pokemon, &move_name, line);
    }
}

/// Owner of the item named in a `[from] item:` annotation
fn item_holder(msg: &ServerMessage) -> Option<&Pokemon> {
    match msg {
        ServerMessage::Damage { pokemon, of, .. }
        | ServerMessage::Heal { pokemon, of, .. }
        | ServerMessage::Status { pokemon, of, .. }
        | ServerMessage::Boost { pokemon, of, .. }
        | ServerMessage::Unboost { pokemon, of, .. } => Some(of.as_ref().unwrap_or(pokemon)),
        _ => None,
    }
}
