//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The root side is always the maximizer and every leaf is scored from its
//! perspective. Each explored node works on its own clone of the position.

use log::{debug, trace, warn};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::search::board_scoring::{AliceScorer, BoardScorer};
use crate::search::move_ordering::order_moves;
use crate::search::threading::parallel_root_search;

/// Score bound used for the search window and for nodes without moves.
pub const INF: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Worker threads for the root split. `1` keeps the search sequential.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            threads: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            best_move: None,
            best_score: -INF,
            nodes: 0,
        }
    }
}

/// Best move for `side` searched `max_depth` plies deep with the default
/// evaluator, or `None` when `side` has no move.
pub fn best_move(position: &Position, side: Side, max_depth: u8) -> Option<Move> {
    let config = SearchConfig {
        max_depth,
        ..SearchConfig::default()
    };
    search(position, side, &config, &AliceScorer).best_move
}

/// Full search entry point.
///
/// The root plays every one of `side`'s moves and scores each reply tree at
/// `max_depth - 1` (a depth of zero behaves like one). The first move with
/// the strictly highest score wins.
pub fn search<S: BoardScorer>(
    position: &Position,
    side: Side,
    config: &SearchConfig,
    scorer: &S,
) -> SearchResult {
    let root_moves = ordered_moves(position, side);
    let child_depth = config.max_depth.saturating_sub(1);

    let result = if config.threads > 1 && root_moves.len() > 1 {
        parallel_root_search(position, side, &root_moves, child_depth, config.threads, scorer)
    } else {
        search_root_moves(position, side, &root_moves, child_depth, scorer)
    };

    match result.best_move {
        Some(mv) => debug!(
            "{side} depth {}: best {mv} score {} nodes {}",
            config.max_depth, result.best_score, result.nodes
        ),
        None => debug!("{side} depth {}: no move available", config.max_depth),
    }
    result
}

pub(crate) fn ordered_moves(position: &Position, side: Side) -> Vec<Move> {
    let mut moves = generate_moves(position, side);
    order_moves(position, &mut moves);
    moves
}

/// Root loop over `moves` in the given order. α rises with each improvement
/// but the root never cuts off.
pub(crate) fn search_root_moves<S: BoardScorer>(
    position: &Position,
    side: Side,
    moves: &[Move],
    child_depth: u8,
    scorer: &S,
) -> SearchResult {
    let mut outcome = SearchResult::default();
    let mut alpha = -INF;

    for mv in moves.iter().copied() {
        let mut child = position.clone();
        if let Err(err) = apply_move(&mut child, mv) {
            warn!("skipping root move {mv}: {err}");
            continue;
        }

        let score = minimax(&child, child_depth, alpha, INF, false, side, scorer, &mut outcome.nodes);
        trace!("root {mv}: {score}");

        if outcome.best_move.is_none() || score > outcome.best_score {
            outcome.best_move = Some(mv);
            outcome.best_score = score;
        }
        alpha = alpha.max(score);
    }

    outcome
}

/// Fail-soft minimax. `maximizing` is true when `root_side` is to move.
#[allow(clippy::too_many_arguments)]
fn minimax<S: BoardScorer>(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root_side: Side,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return scorer.score(position, root_side);
    }

    let to_move = if maximizing {
        root_side
    } else {
        root_side.opposite()
    };
    let moves = ordered_moves(position, to_move);

    let mut value = if maximizing { -INF } else { INF };
    for mv in moves {
        let mut child = position.clone();
        if let Err(err) = apply_move(&mut child, mv) {
            warn!("skipping {mv} at depth {depth}: {err}");
            continue;
        }

        let score = minimax(&child, depth - 1, alpha, beta, !maximizing, root_side, scorer, nodes);
        if maximizing {
            value = value.max(score);
            alpha = alpha.max(value);
        } else {
            value = value.min(score);
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{evaluate, MaterialScorer};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    /// Unpruned minimax over the same ordering, returning the root choice.
    fn reference_best(position: &Position, side: Side, depth: u8) -> Option<(Move, i32)> {
        fn full(position: &Position, depth: u8, maximizing: bool, root_side: Side) -> i32 {
            if depth == 0 {
                return evaluate(position, root_side);
            }
            let to_move = if maximizing {
                root_side
            } else {
                root_side.opposite()
            };
            let scores = ordered_moves(position, to_move).into_iter().map(|mv| {
                let mut child = position.clone();
                apply_move(&mut child, mv).expect("generated move applies");
                full(&child, depth - 1, !maximizing, root_side)
            });
            if maximizing {
                scores.max().unwrap_or(-INF)
            } else {
                scores.min().unwrap_or(INF)
            }
        }

        let mut best: Option<(Move, i32)> = None;
        for mv in ordered_moves(position, side) {
            let mut child = position.clone();
            apply_move(&mut child, mv).expect("generated move applies");
            let score = full(&child, depth.saturating_sub(1), false, side);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best
    }

    /// Node count of a pruned search whose nodes below the root list their
    /// moves with `moves_for`. The root always uses `ordered_moves`.
    fn pruned_node_count(
        position: &Position,
        side: Side,
        depth: u8,
        moves_for: fn(&Position, Side) -> Vec<Move>,
    ) -> u64 {
        #[allow(clippy::too_many_arguments)]
        fn node(
            position: &Position,
            depth: u8,
            mut alpha: i32,
            mut beta: i32,
            maximizing: bool,
            root_side: Side,
            moves_for: fn(&Position, Side) -> Vec<Move>,
            nodes: &mut u64,
        ) -> i32 {
            *nodes += 1;
            if depth == 0 {
                return evaluate(position, root_side);
            }
            let to_move = if maximizing {
                root_side
            } else {
                root_side.opposite()
            };
            let mut value = if maximizing { -INF } else { INF };
            for mv in moves_for(position, to_move) {
                let mut child = position.clone();
                apply_move(&mut child, mv).expect("generated move applies");
                let score = node(&child, depth - 1, alpha, beta, !maximizing, root_side, moves_for, nodes);
                if maximizing {
                    value = value.max(score);
                    alpha = alpha.max(value);
                } else {
                    value = value.min(score);
                    beta = beta.min(value);
                }
                if beta <= alpha {
                    break;
                }
            }
            value
        }

        let mut nodes = 0;
        let mut alpha = -INF;
        for mv in ordered_moves(position, side) {
            let mut child = position.clone();
            apply_move(&mut child, mv).expect("generated move applies");
            let score = node(&child, depth - 1, alpha, INF, false, side, moves_for, &mut nodes);
            alpha = alpha.max(score);
        }
        nodes
    }

    fn tactical_position() -> Position {
        let mut position = Position::new_empty();
        position.put_piece(BoardId::Two, sq(7, 4), Piece::new(PieceKind::King, Side::White));
        position.put_piece(BoardId::One, sq(4, 0), Piece::new(PieceKind::Rook, Side::White));
        position.put_piece(BoardId::One, sq(6, 2), Piece::new(PieceKind::Knight, Side::White));
        position.put_piece(BoardId::One, sq(4, 7), Piece::new(PieceKind::Queen, Side::Black));
        position.put_piece(BoardId::Two, sq(0, 4), Piece::new(PieceKind::King, Side::Black));
        position.put_piece(BoardId::One, sq(1, 3), Piece::new(PieceKind::Pawn, Side::Black));
        position
    }

    #[test]
    fn takes_the_hanging_queen() {
        let position = tactical_position();
        assert_eq!(
            best_move(&position, Side::White, 1),
            Some(Move::new(BoardId::One, sq(4, 0), sq(4, 7)))
        );
    }

    #[test]
    fn pruning_matches_full_minimax_at_depth_two() {
        let start = Position::new_game();
        let mut after_push = start.clone();
        apply_move(&mut after_push, Move::new(BoardId::One, sq(6, 4), sq(4, 4))).expect("push");

        for (position, side) in [
            (start, Side::White),
            (after_push, Side::Black),
            (tactical_position(), Side::White),
            (tactical_position(), Side::Black),
        ] {
            let config = SearchConfig {
                max_depth: 2,
                threads: 1,
            };
            let result = search(&position, side, &config, &AliceScorer);
            let (expected_move, expected_score) =
                reference_best(&position, side, 2).expect("side has moves");
            assert_eq!(result.best_move, Some(expected_move));
            assert_eq!(result.best_score, expected_score);
        }
    }

    #[test]
    fn pruning_matches_full_minimax_at_depth_three() {
        let position = tactical_position();
        let config = SearchConfig {
            max_depth: 3,
            threads: 1,
        };
        let result = search(&position, Side::White, &config, &AliceScorer);
        let (expected_move, expected_score) =
            reference_best(&position, Side::White, 3).expect("white has moves");
        assert_eq!(result.best_move, Some(expected_move));
        assert_eq!(result.best_score, expected_score);
    }

    #[test]
    fn moves_are_ordered_below_the_root() {
        let mut after_push = Position::new_game();
        apply_move(&mut after_push, Move::new(BoardId::One, sq(6, 4), sq(4, 4))).expect("push");

        let mut differs = false;
        for (position, side) in [
            (tactical_position(), Side::White),
            (tactical_position(), Side::Black),
            (after_push, Side::Black),
        ] {
            let config = SearchConfig {
                max_depth: 3,
                threads: 1,
            };
            let result = search(&position, side, &config, &AliceScorer);
            assert_eq!(result.nodes, pruned_node_count(&position, side, 3, ordered_moves));
            differs |= result.nodes != pruned_node_count(&position, side, 3, generate_moves);
        }
        assert!(differs, "generation order should prune differently");
    }

    #[test]
    fn black_replies_from_its_own_pieces() {
        let mut position = Position::new_game();
        apply_move(&mut position, Move::new(BoardId::One, sq(6, 4), sq(5, 4))).expect("push");
        assert_eq!(position.piece_at(BoardId::One, sq(6, 4)), None);
        assert_eq!(
            position.piece_at(BoardId::Two, sq(5, 4)),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );

        let mv = best_move(&position, Side::Black, 1).expect("black has moves");
        let mover = position
            .piece_at(mv.board, mv.from)
            .expect("origin holds a piece");
        assert_eq!(mover.side, Side::Black);
    }

    #[test]
    fn no_moves_gives_no_best_move() {
        let mut position = Position::new_empty();
        position.put_piece(BoardId::One, sq(0, 0), Piece::new(PieceKind::King, Side::Black));
        assert_eq!(best_move(&position, Side::White, 3), None);

        let result = search(&position, Side::White, &SearchConfig::default(), &MaterialScorer);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, -INF);
    }

    #[test]
    fn depth_zero_still_returns_a_move() {
        let position = Position::new_game();
        assert!(best_move(&position, Side::White, 0).is_some());
    }

    #[test]
    fn does_not_modify_the_input_position() {
        let position = tactical_position();
        let before = position.clone();
        let _ = best_move(&position, Side::Black, 2);
        assert_eq!(position, before);
    }
}
