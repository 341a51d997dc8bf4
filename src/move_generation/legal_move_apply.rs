//! Move application.
//!
//! A non-castling move always lands on the opposite board; a capture also
//! clears the victim from the board the mover left. Castling stays on the
//! board it was played on.

use thiserror::Error;

use crate::game_state::chess_rules::{
    castling_side_for_king_step, castling_side_for_rook_col, rook_castle_col, rook_home_col,
};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyMoveError {
    #[error("no piece on board {} at {square}", .board.number())]
    EmptyOrigin { board: BoardId, square: Square },
}

/// What an applied move turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture(Piece),
    Castle(CastlingSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub piece: Piece,
    pub kind: MoveKind,
    /// Piece that stood on the landing square of the opposite board and was
    /// overwritten by the mover. Only sliders and kings can land there.
    pub displaced: Option<Piece>,
}

impl AppliedMove {
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    /// Board the moved piece ends up on.
    #[inline]
    pub fn landing_board(&self) -> BoardId {
        match self.kind {
            MoveKind::Castle(_) => self.mv.board,
            _ => self.mv.board.opposite(),
        }
    }
}

/// Apply `mv` to `position` in place.
///
/// A king moving two columns castles toward that side. Any other move lands
/// on the opposite board, replacing whatever stood there.
///
/// Fails without touching `position` when the origin square is empty. The
/// move is not checked for legality; callers pick it from the generated set.
pub fn apply_move(position: &mut Position, mv: Move) -> Result<AppliedMove, ApplyMoveError> {
    let Move { board, from, to } = mv;

    let piece = position
        .piece_at(board, from)
        .ok_or(ApplyMoveError::EmptyOrigin {
            board,
            square: from,
        })?;

    let captured = position
        .piece_at(board, to)
        .filter(|target| target.side != piece.side);
    let castle = if piece.kind == PieceKind::King {
        castling_side_for_king_step(from.col, to.col)
    } else {
        None
    };

    let mut displaced = None;
    let kind = if let Some(castling_side) = castle {
        position.remove_piece(board, from);
        position.put_piece(board, to, piece);
        move_castling_rook(position, board, to, castling_side);
        MoveKind::Castle(castling_side)
    } else {
        position.remove_piece(board, from);
        displaced = position.piece_at(board.opposite(), to);
        position.put_piece(board.opposite(), to, piece);
        match captured {
            Some(victim) => {
                position.remove_piece(board, to);
                MoveKind::Capture(victim)
            }
            None => MoveKind::Quiet,
        }
    };

    position.move_log.push(mv);
    match piece.kind {
        PieceKind::King => position.king_moved[piece.side.index()] = true,
        PieceKind::Rook => {
            if let Some(castling_side) = castling_side_for_rook_col(from.col) {
                position.rook_moved[piece.side.index()].set(castling_side);
            }
        }
        _ => {}
    }

    Ok(AppliedMove {
        mv,
        piece,
        kind,
        displaced,
    })
}

/// Move the rook from its corner to the square beside the king's landing
/// square `king_to`, on the castling board. Nothing happens if no rook is
/// there.
fn move_castling_rook(position: &mut Position, board: BoardId, king_to: Square, castling_side: CastlingSide) {
    let row = king_to.row;
    let corner = Square::new(row, rook_home_col(castling_side));
    if let Some(rook) = position
        .piece_at(board, corner)
        .filter(|piece| piece.kind == PieceKind::Rook)
    {
        position.remove_piece(board, corner);
        position.put_piece(board, Square::new(row, rook_castle_col(castling_side, king_to.col)), rook);
    }
}
