use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{enemy_on, is_quiet_landing, Destinations};
use crate::moves::pawn_moves::pawn_capture_targets;

/// Pushes and diagonal captures for a `side` pawn on `board` at `from`.
///
/// The double push needs the intermediate square free on the pawn's own board;
/// each landing square also goes through the mirror-vacancy policy. Captures
/// only look at the pawn's own board.
pub fn generate_pawn_destinations(
    position: &Position,
    board: BoardId,
    from: Square,
    side: Side,
    out: &mut Destinations,
) {
    let dir = pawn_direction(side);

    if let Some(one_step) = from.offset(dir, 0) {
        if position.is_empty(board, one_step) {
            if is_quiet_landing(position, PieceKind::Pawn, board, one_step) {
                out.quiet.push(one_step);
            }

            if from.row == pawn_start_row(side) {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if is_quiet_landing(position, PieceKind::Pawn, board, two_step) {
                        out.quiet.push(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_capture_targets(side, from) {
        if enemy_on(position, board, target, side) {
            out.captures.push(target);
        }
    }
}
