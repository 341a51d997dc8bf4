use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{enemy_on, is_quiet_landing, Destinations};
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_destinations(
    position: &Position,
    board: BoardId,
    from: Square,
    side: Side,
    out: &mut Destinations,
) {
    for target in knight_targets(from) {
        if position.is_empty(board, target) {
            if is_quiet_landing(position, PieceKind::Knight, board, target) {
                out.quiet.push(target);
            }
        } else if enemy_on(position, board, target, side) {
            out.captures.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_knight_has_two_quiet_moves() {
        let position = Position::new_game();
        let mut out = Destinations::default();
        generate_knight_destinations(&position, BoardId::One, Square::new(7, 1), Side::White, &mut out);
        assert_eq!(out.quiet, vec![Square::new(5, 0), Square::new(5, 2)]);
        assert!(out.captures.is_empty());
    }

    #[test]
    fn mirror_occupant_blocks_quiet_but_not_capture() {
        let mut position = Position::new_empty();
        let from = Square::new(4, 4);
        position.put_piece(BoardId::Two, from, Piece::new(PieceKind::Knight, Side::White));
        // Mirror of a quiet target on board one.
        position.put_piece(
            BoardId::One,
            Square::new(2, 3),
            Piece::new(PieceKind::Pawn, Side::White),
        );
        // Enemy on the knight's own board, with something on the mirror square too.
        position.put_piece(
            BoardId::Two,
            Square::new(2, 5),
            Piece::new(PieceKind::Pawn, Side::Black),
        );
        position.put_piece(
            BoardId::One,
            Square::new(2, 5),
            Piece::new(PieceKind::Pawn, Side::Black),
        );

        let mut out = Destinations::default();
        generate_knight_destinations(&position, BoardId::Two, from, Side::White, &mut out);

        assert!(!out.quiet.contains(&Square::new(2, 3)));
        assert_eq!(out.quiet.len(), 6);
        assert_eq!(out.captures, vec![Square::new(2, 5)]);
    }
}
