//! Parallel root search.
//!
//! The ordered root moves are split into contiguous chunks, one per scoped
//! worker. Every worker clones its own positions and runs the sequential root
//! loop over its chunk with a fresh window. The merge keeps the earliest move
//! holding the strictly greatest score, which is the move the sequential
//! search would pick.

use std::thread;

use log::warn;

use crate::game_state::chess_types::*;
use crate::search::alpha_beta::{search_root_moves, SearchResult};
use crate::search::board_scoring::BoardScorer;

/// Clamp a requested thread count to something usable for `work_items`.
#[inline]
pub fn normalized_threads(requested: usize, work_items: usize) -> usize {
    requested.max(1).min(work_items.max(1))
}

pub(crate) fn parallel_root_search<S: BoardScorer>(
    position: &Position,
    side: Side,
    root_moves: &[Move],
    child_depth: u8,
    threads: usize,
    scorer: &S,
) -> SearchResult {
    let workers = normalized_threads(threads, root_moves.len());
    let chunk_size = root_moves.len().div_ceil(workers).max(1);

    let outcomes: Vec<SearchResult> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || search_root_moves(position, side, chunk, child_depth, scorer))
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| match handle.join() {
                Ok(outcome) => Some(outcome),
                Err(_) => {
                    warn!("root search worker panicked; its moves are dropped");
                    None
                }
            })
            .collect()
    });

    merge_outcomes(outcomes)
}

/// Outcomes arrive in chunk order, so the first strictly greater score seen
/// is also the earliest root move with that score.
fn merge_outcomes(outcomes: Vec<SearchResult>) -> SearchResult {
    let mut merged = SearchResult::default();
    for outcome in outcomes {
        merged.nodes += outcome.nodes;
        let Some(mv) = outcome.best_move else {
            continue;
        };
        if merged.best_move.is_none() || outcome.best_score > merged.best_score {
            merged.best_move = Some(mv);
            merged.best_score = outcome.best_score;
        }
    }
    merged
}
