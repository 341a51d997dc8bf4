//! Crate root module declarations for the Alice chess engine.
//!
//! Exposes the two-board rule engine, the evaluator and alpha-beta search,
//! the engine trait with its implementations, and the session and match
//! utilities so binaries, benches and a presentation layer share stable
//! module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod ray_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod threading;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod game_session;
}
