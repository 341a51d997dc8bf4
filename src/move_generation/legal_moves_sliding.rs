use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_quiet_landing, Destinations};
use crate::moves::ray_moves::{ray, ray_directions};

/// Ray destinations for a bishop, rook or queen.
///
/// Each ray runs until the first occupied square on the piece's own board: an
/// enemy there is a capture, a friend is not a destination.
pub fn generate_sliding_destinations(
    position: &Position,
    kind: PieceKind,
    board: BoardId,
    from: Square,
    side: Side,
    out: &mut Destinations,
) {
    for direction in ray_directions(kind) {
        for target in ray(from, *direction) {
            match position.piece_at(board, target) {
                None => {
                    if is_quiet_landing(position, kind, board, target) {
                        out.quiet.push(target);
                    }
                }
                Some(piece) => {
                    if piece.side != side {
                        out.captures.push(target);
                    }
                    break;
                }
            }
        }
    }
}
