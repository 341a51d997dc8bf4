//! Engine abstraction layer shared by the game session and match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be swapped at runtime behind a single trait interface.

use thiserror::Error;

use crate::game_state::chess_types::{Move, Position, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid {name} value '{value}'")]
    InvalidOptionValue { name: String, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    /// Pick a move for `side`. `best_move` is `None` when `side` has no move.
    fn choose_move(
        &mut self,
        position: &Position,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError>;
}

/// Parse a numeric option value, ignoring surrounding whitespace.
pub(crate) fn parse_option<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, EngineError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}
