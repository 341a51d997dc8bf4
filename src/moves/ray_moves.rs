use crate::game_state::chess_types::{PieceKind, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Ray directions for a sliding piece kind; empty for non-sliders.
pub fn ray_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN: [(i8, i8); 8] = [
        (0, 1),
        (0, -1),
        (1, 0),
        (-1, 0),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    match kind {
        PieceKind::Rook => &ORTHOGONAL_DIRECTIONS,
        PieceKind::Bishop => &DIAGONAL_DIRECTIONS,
        PieceKind::Queen => &QUEEN,
        _ => &[],
    }
}

/// Squares from `square` (exclusive) to the board edge along `direction`.
#[inline]
pub fn ray(square: Square, direction: (i8, i8)) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = direction;
    std::iter::successors(square.offset(d_row, d_col), move |sq| {
        sq.offset(d_row, d_col)
    })
}
