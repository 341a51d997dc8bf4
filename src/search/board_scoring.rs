//! Pluggable position evaluation.
//!
//! Search stays independent of the heuristics by delegating static scoring to
//! `BoardScorer`. `AliceScorer` is the engine's evaluator; it is a sum of
//! named terms so each one can be checked on its own.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, king_locations};
use crate::tables::piece_square_tables::piece_square_bonus;

pub const DOUBLED_PAWN_PENALTY: i32 = 20;
pub const ISOLATED_PAWN_PENALTY: i32 = 30;
pub const OWN_KING_IN_CHECK_PENALTY: i32 = 100;

pub trait BoardScorer: Send + Sync {
    /// Score from `perspective`'s point of view; higher is better for it.
    fn score(&self, position: &Position, perspective: Side) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

#[inline]
fn sign(side: Side, perspective: Side) -> i32 {
    if side == perspective {
        1
    } else {
        -1
    }
}

/// Material only, both boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position, perspective: Side) -> i32 {
        position
            .pieces()
            .map(|(_, _, piece)| piece_value(piece.kind) * sign(piece.side, perspective))
            .sum()
    }
}

/// Material, piece-square tables, pawn structure and the own-king-in-check
/// penalty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliceScorer;

impl BoardScorer for AliceScorer {
    fn score(&self, position: &Position, perspective: Side) -> i32 {
        material_and_placement(position, perspective)
            + pawn_structure(position, perspective)
            + own_king_in_check(position, perspective)
    }
}

/// Evaluate with the engine's default scorer.
#[inline]
pub fn evaluate(position: &Position, perspective: Side) -> i32 {
    AliceScorer.score(position, perspective)
}

/// Material value plus piece-square bonus for every piece on both boards.
pub fn material_and_placement(position: &Position, perspective: Side) -> i32 {
    position
        .pieces()
        .map(|(_, square, piece)| {
            let value = piece_value(piece.kind) + piece_square_bonus(piece.kind, piece.side, square);
            value * sign(piece.side, perspective)
        })
        .sum()
}

/// Doubled and isolated pawn penalties, scored per pawn and per board.
pub fn pawn_structure(position: &Position, perspective: Side) -> i32 {
    let mut score = 0;
    for board in BoardId::BOTH {
        // [side][col] pawn counts on this board.
        let mut files = [[0u8; 8]; 2];
        for (square, piece) in position.board(board).pieces() {
            if piece.kind == PieceKind::Pawn {
                files[piece.side.index()][square.col as usize] += 1;
            }
        }

        for (square, piece) in position.board(board).pieces() {
            if piece.kind != PieceKind::Pawn {
                continue;
            }
            let own_files = &files[piece.side.index()];
            let col = square.col as usize;
            let mut penalty = 0;
            if own_files[col] > 1 {
                penalty += DOUBLED_PAWN_PENALTY;
            }
            let left = col.checked_sub(1).map_or(0, |c| own_files[c]);
            let right = own_files.get(col + 1).copied().unwrap_or(0);
            if left == 0 && right == 0 {
                penalty += ISOLATED_PAWN_PENALTY;
            }
            score -= penalty * sign(piece.side, perspective);
        }
    }
    score
}

/// Penalty for `perspective`'s own king standing in check.
///
/// Only the perspective side's king is scored. The opponent's king being in
/// check earns nothing, so this term is not antisymmetric like the others.
pub fn own_king_in_check(position: &Position, perspective: Side) -> i32 {
    let checked = king_locations(position, perspective)
        .filter(|(board, square)| is_in_check(position, *square, *board))
        .count() as i32;
    -OWN_KING_IN_CHECK_PENALTY * checked
}
