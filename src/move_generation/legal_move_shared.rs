//! Helpers shared by the per-kind destination generators.
//!
//! The mirror-vacancy policy lives here: whether a quiet move of a given kind
//! also needs its landing square empty on the opposite board.

use crate::game_state::chess_types::*;

/// Indexed by `PieceKind::index()`. Pawns and knights must land on a square
/// that is empty on both boards; sliders and kings only check their own board.
pub const MIRROR_VACANCY_POLICY: [bool; 6] = [true, true, false, false, false, false];

#[inline]
pub const fn requires_mirror_vacancy(kind: PieceKind) -> bool {
    MIRROR_VACANCY_POLICY[kind.index()]
}

/// Whether a quiet move of `kind` may land on `square` from `board`.
#[inline]
pub fn is_quiet_landing(position: &Position, kind: PieceKind, board: BoardId, square: Square) -> bool {
    position.is_empty(board, square)
        && (!requires_mirror_vacancy(kind) || position.is_empty(board.opposite(), square))
}

#[inline]
pub fn enemy_on(position: &Position, board: BoardId, square: Square, side: Side) -> bool {
    matches!(position.piece_at(board, square), Some(piece) if piece.side != side)
}

/// Destinations split by type; callers read them quiet-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destinations {
    pub quiet: Vec<Square>,
    pub captures: Vec<Square>,
}

impl Destinations {
    /// Quiet destinations followed by capturing destinations.
    pub fn into_ordered(self) -> Vec<Square> {
        let mut out = self.quiet;
        out.extend(self.captures);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PIECE_KINDS: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[test]
    fn mirror_policy_covers_pawn_and_knight_only() {
        let required: Vec<PieceKind> = ALL_PIECE_KINDS
            .into_iter()
            .filter(|kind| requires_mirror_vacancy(*kind))
            .collect();
        assert_eq!(required, vec![PieceKind::Pawn, PieceKind::Knight]);
    }

    #[test]
    fn quiet_landing_respects_policy() {
        let mut position = Position::new_empty();
        let square = Square::new(4, 4);
        position.put_piece(BoardId::Two, square, Piece::new(PieceKind::Pawn, Side::Black));

        assert!(!is_quiet_landing(&position, PieceKind::Knight, BoardId::One, square));
        assert!(is_quiet_landing(&position, PieceKind::Rook, BoardId::One, square));
        assert!(!is_quiet_landing(&position, PieceKind::Rook, BoardId::Two, square));
    }
}
