//! Random-move engine.
//!
//! Selects uniformly from the generated moves. Used as a sparring partner in
//! the match harness and for diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{parse_option, Engine, EngineError, EngineOutput, GoParams};
use crate::game_state::chess_types::{Position, Side};
use crate::move_generation::legal_move_generator::generate_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Unseeded engine drawing its seed from the thread RNG.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Alice Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        if name.eq_ignore_ascii_case("Seed") {
            let seed: u64 = parse_option(name, value)?;
            self.rng = StdRng::seed_from_u64(seed);
            return Ok(());
        }
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        position: &Position,
        side: Side,
        _params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let moves = generate_moves(position, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine moves {}", moves.len()));
        out.best_move = moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}
