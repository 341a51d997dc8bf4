//! Alpha-beta engine.
//!
//! Wraps the fixed-depth search behind the `Engine` trait. Depth and thread
//! count are configurable through `set_option`.

use std::time::Instant;

use crate::engines::engine_trait::{parse_option, Engine, EngineError, EngineOutput, GoParams};
use crate::game_state::chess_types::{Position, Side};
use crate::search::alpha_beta::{search, SearchConfig};
use crate::search::board_scoring::AliceScorer;

const MAX_DEPTH: u8 = 16;
const MAX_THREADS: usize = 64;

pub struct AlphaBetaEngine {
    config: SearchConfig,
    scorer: AliceScorer,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            config: SearchConfig {
                max_depth: default_depth.clamp(1, MAX_DEPTH),
                ..SearchConfig::default()
            },
            scorer: AliceScorer,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.config.threads = threads.clamp(1, MAX_THREADS);
        self
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Alice AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        if name.eq_ignore_ascii_case("Depth") {
            let depth: u8 = parse_option(name, value)?;
            self.config.max_depth = depth.clamp(1, MAX_DEPTH);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Threads") {
            let threads: usize = parse_option(name, value)?;
            self.config.threads = threads.clamp(1, MAX_THREADS);
            return Ok(());
        }
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        position: &Position,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let config = SearchConfig {
            max_depth: params
                .depth
                .map_or(self.config.max_depth, |d| d.clamp(1, MAX_DEPTH)),
            ..self.config
        };

        let started = Instant::now();
        let result = search(position, side, &config, &self.scorer);
        let elapsed_ms = started.elapsed().as_millis();

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} time {}",
            config.max_depth, result.best_score, result.nodes, elapsed_ms
        ));
        if config.threads > 1 {
            out.info_lines
                .push(format!("info string alpha_beta threads {}", config.threads));
        }
        if result.best_move.is_none() {
            out.info_lines
                .push(format!("info string alpha_beta no_move_for {side}"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn options_update_search_config() {
        let mut engine = AlphaBetaEngine::default();
        assert_eq!(engine.config().max_depth, 4);

        engine.set_option("depth", "2").expect("depth option");
        engine.set_option("Threads", " 3 ").expect("threads option");
        assert_eq!(
            engine.config(),
            SearchConfig {
                max_depth: 2,
                threads: 3
            }
        );

        engine.set_option("Depth", "0").expect("depth option");
        assert_eq!(engine.config().max_depth, 1);

        let threaded = AlphaBetaEngine::new(3).with_threads(0);
        assert_eq!(threaded.config().threads, 1);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut engine = AlphaBetaEngine::default();
        assert_eq!(
            engine.set_option("Depth", "deep"),
            Err(EngineError::InvalidOptionValue {
                name: "Depth".to_owned(),
                value: "deep".to_owned()
            })
        );
        assert_eq!(
            engine.set_option("Hash", "16"),
            Err(EngineError::UnknownOption("Hash".to_owned()))
        );
    }

    #[test]
    fn chooses_a_move_for_the_requested_side() {
        let mut engine = AlphaBetaEngine::new(2);
        let position = Position::new_game();
        let out = engine
            .choose_move(&position, Side::Black, &GoParams { depth: Some(1) })
            .expect("search succeeds");
        let mv = out.best_move.expect("black has moves");
        assert_eq!(
            position.piece_at(mv.board, mv.from).map(|p| p.side),
            Some(Side::Black)
        );
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }

    #[test]
    fn reports_no_move() {
        let mut engine = AlphaBetaEngine::new(2);
        let out = engine
            .choose_move(&Position::new_empty(), Side::White, &GoParams::default())
            .expect("search succeeds");
        assert_eq!(out.best_move, None);
    }
}
