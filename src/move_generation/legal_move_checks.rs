//! Attack and check detection.
//!
//! Every query is confined to a single board: a piece on the opposite board
//! never attacks, blocks, or defends anything here.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::ray_moves::{ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// True if a piece of `defending_side`'s opponent attacks `square` on `board`.
pub fn square_under_attack(
    position: &Position,
    square: Square,
    board: BoardId,
    defending_side: Side,
) -> bool {
    let attacker = defending_side.opposite();
    let is_attacker = |sq: Square, kinds: &[PieceKind]| {
        matches!(
            position.piece_at(board, sq),
            Some(piece) if piece.side == attacker && kinds.contains(&piece.kind)
        )
    };

    if pawn_attack_sources(attacker, square).any(|sq| is_attacker(sq, &[PieceKind::Pawn])) {
        return true;
    }

    if knight_targets(square).any(|sq| is_attacker(sq, &[PieceKind::Knight])) {
        return true;
    }

    let slider_lines = [
        (&ORTHOGONAL_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
        (&DIAGONAL_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, kinds) in slider_lines {
        for direction in directions {
            let first_blocker = ray(square, *direction).find(|sq| !position.is_empty(board, *sq));
            if let Some(sq) = first_blocker {
                if is_attacker(sq, &kinds) {
                    return true;
                }
            }
        }
    }

    king_targets(square).any(|sq| is_attacker(sq, &[PieceKind::King]))
}

/// True iff a king stands on `square` of `board` and is attacked there.
pub fn is_in_check(position: &Position, square: Square, board: BoardId) -> bool {
    match position.piece_at(board, square) {
        Some(piece) if piece.kind == PieceKind::King => {
            square_under_attack(position, square, board, piece.side)
        }
        _ => false,
    }
}

/// Every `side` king on either board with its location.
pub fn king_locations(position: &Position, side: Side) -> impl Iterator<Item = (BoardId, Square)> + '_ {
    position
        .pieces_of(side)
        .filter(|(_, _, piece)| piece.kind == PieceKind::King)
        .map(|(board, square, _)| (board, square))
}

/// Number of `side` kings left across both boards; 0 once captured.
pub fn king_count(position: &Position, side: Side) -> usize {
    king_locations(position, side).count()
}

/// True if any `side` king is in check on its own board.
pub fn is_side_in_check(position: &Position, side: Side) -> bool {
    king_locations(position, side).any(|(board, square)| is_in_check(position, square, board))
}
