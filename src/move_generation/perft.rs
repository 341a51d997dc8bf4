//! Perft: exhaustive move-path counting.
//!
//! Walks every generated move to a fixed depth with strict side alternation,
//! cloning the position per node. Used as a regression check on move
//! generation and as a benchmark workload.

use std::thread;

use log::warn;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, MoveKind};
use crate::move_generation::legal_move_generator::generate_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
    }
}

/// Count leaf nodes (and the capture/castle moves leading to them) `depth`
/// plies below `position`, with `side` to move first.
pub fn perft(position: &Position, side: Side, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    for mv in generate_moves(position, side) {
        perft_recurse(position, side, mv, depth, &mut total);
    }
    total
}

/// Same counts as `perft`, with the root moves split across worker threads.
pub fn perft_multi_threaded(position: &Position, side: Side, depth: u8, threads: usize) -> PerftCounts {
    if depth == 0 || threads <= 1 {
        return perft(position, side, depth);
    }

    let root_moves = generate_moves(position, side);
    let chunk_size = root_moves.len().div_ceil(threads).max(1);

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    for mv in chunk {
                        perft_recurse(position, side, *mv, depth, &mut local);
                    }
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(_) => warn!("perft worker thread panicked; its subtree is missing"),
            }
        }
        total
    })
}

fn perft_recurse(position: &Position, side: Side, mv: Move, depth: u8, counts: &mut PerftCounts) {
    let mut child = position.clone();
    let Ok(applied) = apply_move(&mut child, mv) else {
        return;
    };

    if depth == 1 {
        counts.nodes += 1;
        match applied.kind {
            MoveKind::Capture(_) => counts.captures += 1,
            MoveKind::Castle(_) => counts.castles += 1,
            MoveKind::Quiet => {}
        }
        return;
    }

    let next_side = side.opposite();
    for reply in generate_moves(&child, next_side) {
        perft_recurse(&child, next_side, reply, depth - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_one_from_startpos() {
        let counts = perft(&Position::new_game(), Side::White, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 20,
                captures: 0,
                castles: 0
            }
        );
    }

    #[test]
    fn perft_depth_two_is_symmetric_product() {
        // Black's replies are unaffected by any single White opening move.
        let counts = perft(&Position::new_game(), Side::White, 2);
        assert_eq!(counts.nodes, 400);
        assert_eq!(counts.captures, 0);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let position = Position::new_game();
        let single = perft(&position, Side::White, 3);
        let multi = perft_multi_threaded(&position, Side::White, 3, 4);
        assert_eq!(single, multi);
    }

    #[test]
    fn depth_zero_counts_the_root() {
        assert_eq!(perft(&Position::new_game(), Side::Black, 0).nodes, 1);
    }
}
