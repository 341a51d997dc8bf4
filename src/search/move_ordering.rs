//! Move ordering heuristic applied at every search node.
//!
//! Scores are kept in quarter units so the half-step centrality bonus stays
//! integral: a capture is worth 10 and a destination's centrality is
//! `(7 - (|3.5 - row| + |3.5 - col|)) / 2`, both multiplied by four.

use crate::game_state::chess_types::*;

const CAPTURE_BONUS: i32 = 40;

/// Ordering score of `mv` in quarter units. Higher is searched first.
#[inline]
pub fn move_order_score(position: &Position, mv: Move) -> i32 {
    let capture = if position.is_empty(mv.board, mv.to) {
        0
    } else {
        CAPTURE_BONUS
    };
    let row = i32::from(mv.to.row);
    let col = i32::from(mv.to.col);
    let centrality = 14 - (7 - 2 * row).abs() - (7 - 2 * col).abs();
    capture + centrality
}

/// Sort `moves` by descending ordering score. Equal scores keep their
/// generation order.
pub fn order_moves(position: &Position, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(move_order_score(position, *mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_moves;

    #[test]
    fn centre_squares_score_highest() {
        let position = Position::new_empty();
        let centre = Move::new(BoardId::One, Square::new(5, 4), Square::new(4, 4));
        let corner = Move::new(BoardId::One, Square::new(1, 0), Square::new(0, 0));
        assert_eq!(move_order_score(&position, centre), 12);
        assert_eq!(move_order_score(&position, corner), 0);
    }

    #[test]
    fn captures_outrank_quiet_moves() {
        let mut position = Position::new_empty();
        position.put_piece(BoardId::Two, Square::new(0, 0), Piece::new(PieceKind::Pawn, Side::Black));
        let capture = Move::new(BoardId::Two, Square::new(1, 1), Square::new(0, 0));
        let quiet = Move::new(BoardId::One, Square::new(5, 4), Square::new(4, 4));
        assert!(move_order_score(&position, capture) > move_order_score(&position, quiet));

        // The same target on the other board is not a capture.
        let other_board = Move::new(BoardId::One, Square::new(1, 1), Square::new(0, 0));
        assert_eq!(move_order_score(&position, other_board), 0);
    }

    #[test]
    fn ordering_is_stable_for_ties() {
        let position = Position::new_game();
        let mut moves = generate_moves(&position, Side::White);
        let generated = moves.clone();
        order_moves(&position, &mut moves);

        for pair in moves.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (sa, sb) = (move_order_score(&position, a), move_order_score(&position, b));
            assert!(sa >= sb);
            if sa == sb {
                let ia = generated.iter().position(|m| *m == a);
                let ib = generated.iter().position(|m| *m == b);
                assert!(ia < ib);
            }
        }
    }
}
