//! Legal move generation entry points.
//!
//! Dispatches per piece kind to the destination generators and assembles
//! full move lists for a side across both boards.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::Destinations;
use crate::move_generation::legal_moves_king::generate_king_destinations;
use crate::move_generation::legal_moves_knight::generate_knight_destinations;
use crate::move_generation::legal_moves_pawn::generate_pawn_destinations;
use crate::move_generation::legal_moves_sliding::generate_sliding_destinations;

/// Destinations for a piece of `kind` standing on `board` at `square`.
///
/// The moving side is read from the piece on the square; an empty square has
/// no destinations. Quiet destinations (castling included) come first,
/// capturing destinations after them.
pub fn legal_destinations(
    kind: PieceKind,
    square: Square,
    board: BoardId,
    position: &Position,
) -> Vec<Square> {
    let Some(piece) = position.piece_at(board, square) else {
        return Vec::new();
    };

    let mut out = Destinations::default();
    match kind {
        PieceKind::Pawn => generate_pawn_destinations(position, board, square, piece.side, &mut out),
        PieceKind::Knight => {
            generate_knight_destinations(position, board, square, piece.side, &mut out)
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_sliding_destinations(position, kind, board, square, piece.side, &mut out)
        }
        PieceKind::King => generate_king_destinations(position, board, square, piece.side, &mut out),
    }
    out.into_ordered()
}

/// Every move for `side`: Board-1 then Board-2, squares in row-major order,
/// each piece's destinations in `legal_destinations` order.
pub fn generate_moves(position: &Position, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (board, from, piece) in position.pieces_of(side) {
        moves.extend(
            legal_destinations(piece.kind, from, board, position)
                .into_iter()
                .map(|to| Move::new(board, from, to)),
        );
    }
    moves
}

/// True if `mv` is one of the moves generated for the piece on its origin.
pub fn is_legal_move(position: &Position, mv: Move) -> bool {
    position
        .piece_at(mv.board, mv.from)
        .is_some_and(|piece| legal_destinations(piece.kind, mv.from, mv.board, position).contains(&mv.to))
}
