use crate::game_state::chess_rules::{
    castle_between_cols, castle_king_path_cols, home_row, king_castle_col, rook_home_col,
    KING_HOME_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::square_under_attack;
use crate::move_generation::legal_move_shared::{enemy_on, Destinations};
use crate::moves::king_moves::king_targets;

/// King steps that do not walk into an attack on the king's own board, plus
/// castling landings (listed with the quiet steps).
pub fn generate_king_destinations(
    position: &Position,
    board: BoardId,
    from: Square,
    side: Side,
    out: &mut Destinations,
) {
    for target in king_targets(from) {
        if position.is_empty(board, target) {
            if !square_under_attack(position, target, board, side) {
                out.quiet.push(target);
            }
        } else if enemy_on(position, board, target, side)
            && !square_under_attack(position, target, board, side)
        {
            out.captures.push(target);
        }
    }

    out.quiet.extend(castling_destinations(side, board, position));
}

/// Castling landings for `side` on `board`: kingside (column 6) first, then
/// queenside (column 2).
///
/// Requires the king and the rook unmoved and standing on their home squares
/// of `board`, every square between them empty on both boards, and no square
/// of the king's path attacked on `board`.
pub fn castling_destinations(side: Side, board: BoardId, position: &Position) -> Vec<Square> {
    let mut out = Vec::with_capacity(2);
    if position.king_moved(side) {
        return out;
    }

    let row = home_row(side);
    let king_home = Square::new(row, KING_HOME_COL);
    if position.piece_at(board, king_home) != Some(Piece::new(PieceKind::King, side)) {
        return out;
    }

    for castling_side in CastlingSide::BOTH {
        if position.rook_moved(side, castling_side) {
            continue;
        }

        let rook_home = Square::new(row, rook_home_col(castling_side));
        if position.piece_at(board, rook_home) != Some(Piece::new(PieceKind::Rook, side)) {
            continue;
        }

        let path_clear = castle_between_cols(castling_side).iter().all(|col| {
            let sq = Square::new(row, *col);
            position.is_empty(board, sq) && position.is_empty(board.opposite(), sq)
        });
        if !path_clear {
            continue;
        }

        let path_safe = castle_king_path_cols(castling_side)
            .iter()
            .all(|col| !square_under_attack(position, Square::new(row, *col), board, side));
        if path_safe {
            out.push(Square::new(row, king_castle_col(castling_side)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Kings and rooks on their home squares of board one, nothing else.
    fn castling_setup() -> Position {
        let mut position = Position::new_empty();
        for side in [Side::White, Side::Black] {
            let row = home_row(side);
            position.put_piece(BoardId::One, Square::new(row, 4), Piece::new(PieceKind::King, side));
            position.put_piece(BoardId::One, Square::new(row, 0), Piece::new(PieceKind::Rook, side));
            position.put_piece(BoardId::One, Square::new(row, 7), Piece::new(PieceKind::Rook, side));
        }
        position
    }

    #[test]
    fn both_castles_available_when_clear() {
        let position = castling_setup();
        assert_eq!(
            castling_destinations(Side::White, BoardId::One, &position),
            vec![Square::new(7, 6), Square::new(7, 2)]
        );
        assert_eq!(
            castling_destinations(Side::Black, BoardId::One, &position),
            vec![Square::new(0, 6), Square::new(0, 2)]
        );
        assert!(castling_destinations(Side::White, BoardId::Two, &position).is_empty());
    }

    #[test]
    fn no_castling_from_starting_position() {
        let position = Position::new_game();
        assert!(castling_destinations(Side::White, BoardId::One, &position).is_empty());
    }

    #[test]
    fn mirror_board_piece_between_blocks_castling() {
        let mut position = castling_setup();
        position.put_piece(BoardId::Two, Square::new(7, 1), Piece::new(PieceKind::Knight, Side::White));
        assert_eq!(
            castling_destinations(Side::White, BoardId::One, &position),
            vec![Square::new(7, 6)]
        );
    }

    #[test]
    fn attacked_path_or_start_blocks_castling() {
        let mut position = castling_setup();
        // Attacks f1 only.
        position.put_piece(BoardId::One, Square::new(3, 5), Piece::new(PieceKind::Rook, Side::Black));
        assert_eq!(
            castling_destinations(Side::White, BoardId::One, &position),
            vec![Square::new(7, 2)]
        );

        // Attack on the king's start square blocks both.
        let mut position = castling_setup();
        position.put_piece(BoardId::One, Square::new(3, 4), Piece::new(PieceKind::Rook, Side::Black));
        assert!(castling_destinations(Side::White, BoardId::One, &position).is_empty());

        // b1 is crossed by the rook only, so an attack there does not matter.
        let mut position = castling_setup();
        position.put_piece(BoardId::One, Square::new(3, 1), Piece::new(PieceKind::Rook, Side::Black));
        assert_eq!(
            castling_destinations(Side::White, BoardId::One, &position).len(),
            2
        );
    }

    #[test]
    fn attack_on_other_board_does_not_block_castling() {
        let mut position = castling_setup();
        position.put_piece(BoardId::Two, Square::new(3, 5), Piece::new(PieceKind::Rook, Side::Black));
        assert_eq!(castling_destinations(Side::White, BoardId::One, &position).len(), 2);
    }

    #[test]
    fn moved_flags_disable_castling() {
        let mut position = castling_setup();
        position.rook_moved[Side::White.index()].set(CastlingSide::Kingside);
        assert_eq!(
            castling_destinations(Side::White, BoardId::One, &position),
            vec![Square::new(7, 2)]
        );

        position.king_moved[Side::White.index()] = true;
        assert!(castling_destinations(Side::White, BoardId::One, &position).is_empty());
    }

    #[test]
    fn king_avoids_attacked_squares() {
        let mut position = Position::new_empty();
        let from = Square::new(4, 4);
        position.put_piece(BoardId::One, from, Piece::new(PieceKind::King, Side::White));
        position.put_piece(BoardId::One, Square::new(0, 3), Piece::new(PieceKind::Rook, Side::Black));
        position.put_piece(BoardId::One, Square::new(3, 5), Piece::new(PieceKind::Pawn, Side::Black));

        let mut out = Destinations::default();
        generate_king_destinations(&position, BoardId::One, from, Side::White, &mut out);

        assert!(out.quiet.iter().all(|sq| sq.col != 3));
        assert_eq!(out.captures, vec![Square::new(3, 5)]);
        assert_eq!(out.quiet.len(), 4);
    }
}
