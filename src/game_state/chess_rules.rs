//! Canonical Alice Chess rule constants.
//!
//! Home rows, the back-rank layout used for the starting position, and the
//! fixed columns involved in castling. Both boards share this geometry.

use crate::game_state::chess_types::{CastlingSide, PieceKind, Side};

/// Back-rank layout from column 0 (file a) to column 7 (file h).
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;

#[inline]
pub const fn home_row(side: Side) -> u8 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(side: Side) -> u8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Row delta of a pawn step.
#[inline]
pub const fn pawn_direction(side: Side) -> i8 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

#[inline]
pub const fn rook_home_col(castling_side: CastlingSide) -> u8 {
    match castling_side {
        CastlingSide::Kingside => 7,
        CastlingSide::Queenside => 0,
    }
}

/// Column the king lands on when castling.
#[inline]
pub const fn king_castle_col(castling_side: CastlingSide) -> u8 {
    match castling_side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    }
}

/// Column the rook lands on: beside the king's landing column, on the side
/// the king came from.
#[inline]
pub const fn rook_castle_col(castling_side: CastlingSide, king_to_col: u8) -> u8 {
    match castling_side {
        CastlingSide::Kingside => king_to_col - 1,
        CastlingSide::Queenside => king_to_col + 1,
    }
}

/// Columns strictly between the king and the rook.
#[inline]
pub const fn castle_between_cols(castling_side: CastlingSide) -> &'static [u8] {
    match castling_side {
        CastlingSide::Kingside => &[5, 6],
        CastlingSide::Queenside => &[1, 2, 3],
    }
}

/// Columns the king stands on or crosses while castling, start included.
#[inline]
pub const fn castle_king_path_cols(castling_side: CastlingSide) -> &'static [u8] {
    match castling_side {
        CastlingSide::Kingside => &[4, 5, 6],
        CastlingSide::Queenside => &[4, 3, 2],
    }
}

/// Castling side implied by a king move. Any two-column king step is a
/// castle, toward the rook on that side.
#[inline]
pub const fn castling_side_for_king_step(from_col: u8, to_col: u8) -> Option<CastlingSide> {
    if from_col.abs_diff(to_col) != 2 {
        None
    } else if to_col > from_col {
        Some(CastlingSide::Kingside)
    } else {
        Some(CastlingSide::Queenside)
    }
}

/// Castling side whose rook starts on `col`, if any.
#[inline]
pub const fn castling_side_for_rook_col(col: u8) -> Option<CastlingSide> {
    match col {
        7 => Some(CastlingSide::Kingside),
        0 => Some(CastlingSide::Queenside),
        _ => None,
    }
}
