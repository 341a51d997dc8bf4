use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Side, Square};

/// Diagonal capture targets of a `side` pawn standing on `square`.
#[inline]
pub fn pawn_capture_targets(side: Side, square: Square) -> impl Iterator<Item = Square> {
    let dir = pawn_direction(side);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(dir, d_col))
}

/// Squares a `side` pawn would have to stand on to capture onto `square`.
#[inline]
pub fn pawn_attack_sources(side: Side, square: Square) -> impl Iterator<Item = Square> {
    let dir = pawn_direction(side);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(-dir, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pawn_captures_toward_row_zero() {
        let targets: Vec<Square> = pawn_capture_targets(Side::White, Square::new(6, 0)).collect();
        assert_eq!(targets, vec![Square::new(5, 1)]);
    }

    #[test]
    fn attack_sources_mirror_capture_targets() {
        let target = Square::new(3, 3);
        for source in pawn_attack_sources(Side::Black, target) {
            assert!(pawn_capture_targets(Side::Black, source).any(|sq| sq == target));
        }
        assert_eq!(pawn_attack_sources(Side::Black, target).count(), 2);
    }
}
