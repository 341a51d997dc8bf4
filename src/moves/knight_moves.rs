use crate::game_state::chess_types::Square;

/// Knight jumps as `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight targets from `square`, in offset order.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}
