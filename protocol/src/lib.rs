use thiserror::Error;

pub mod server;

pub use server::{Player, Pokemon, PokemonDetails, ServerMessage, parse_server_message};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
