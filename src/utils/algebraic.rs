//! Coordinate notation for squares and two-board moves.
//!
//! Squares use algebraic names (`e4`): column 0 is file `a`, row 0 is rank
//! `8`. Moves are written `<board>:<from><to>`, e.g. `1:e2e4` for the piece
//! on Board-1 at e2 moving to e4.

use thiserror::Error;

use crate::game_state::chess_types::{BoardId, Move, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),
    #[error("invalid algebraic file: {0}")]
    InvalidFile(char),
    #[error("invalid algebraic rank: {0}")]
    InvalidRank(char),
    #[error("invalid board number in move '{0}'")]
    InvalidBoard(String),
    #[error("invalid move notation: {0}")]
    InvalidMove(String),
}

/// Parse an algebraic square such as `"e4"`.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) {
        return Err(NotationError::InvalidFile(char::from(file)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidRank(char::from(rank)));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse `"<board>:<from><to>"`.
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let text = text.trim();
    let (board, squares) = text
        .split_once(':')
        .ok_or_else(|| NotationError::InvalidMove(text.to_owned()))?;

    let board = board
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(BoardId::from_number)
        .ok_or_else(|| NotationError::InvalidBoard(text.to_owned()))?;

    if squares.len() != 4 || !squares.is_ascii() {
        return Err(NotationError::InvalidMove(text.to_owned()));
    }
    let from = algebraic_to_square(&squares[..2])?;
    let to = algebraic_to_square(&squares[2..])?;
    Ok(Move::new(board, from, to))
}

#[inline]
pub fn move_to_notation(mv: Move) -> String {
    mv.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_map_rows_to_ranks() {
        assert_eq!(algebraic_to_square("a8"), Ok(Square::new(0, 0)));
        assert_eq!(algebraic_to_square("h1"), Ok(Square::new(7, 7)));
        assert_eq!(algebraic_to_square("e2"), Ok(Square::new(6, 4)));
        assert_eq!(square_to_algebraic(Square::new(4, 4)), "e4");
    }

    #[test]
    fn bad_squares_are_rejected() {
        assert_eq!(algebraic_to_square("i1"), Err(NotationError::InvalidFile('i')));
        assert_eq!(algebraic_to_square("a9"), Err(NotationError::InvalidRank('9')));
        assert_eq!(
            algebraic_to_square("e10"),
            Err(NotationError::InvalidSquare("e10".to_owned()))
        );
    }

    #[test]
    fn moves_carry_their_board() {
        let mv = parse_move("2:g1f3").expect("move should parse");
        assert_eq!(mv, Move::new(BoardId::Two, Square::new(7, 6), Square::new(5, 5)));
        assert_eq!(move_to_notation(mv), "2:g1f3");
    }

    #[test]
    fn bad_moves_are_rejected() {
        assert_eq!(
            parse_move("3:e2e4"),
            Err(NotationError::InvalidBoard("3:e2e4".to_owned()))
        );
        assert_eq!(
            parse_move("e2e4"),
            Err(NotationError::InvalidMove("e2e4".to_owned()))
        );
        assert_eq!(
            parse_move("1:e2e"),
            Err(NotationError::InvalidMove("1:e2e".to_owned()))
        );
    }
}
