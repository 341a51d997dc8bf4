//! Two-board position representation.
//!
//! `Position` is the central model for the engine. It stores both boards,
//! the castling flags and the move log. It has no rule behavior of its own;
//! the rule engine and the search operate on it as an owned value, cloning
//! it whenever a line has to be explored without touching the original.

use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::*;

/// One 8×8 board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// Store `piece` (or clear with `None`) and return the previous occupant.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row as usize][square.col as usize],
            piece,
        )
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    // [board index]
    pub boards: [Board; 2],

    // [side index]
    pub king_moved: [bool; 2],
    pub rook_moved: [RookMoved; 2],

    pub move_log: Vec<Move>,
}

impl Position {
    /// Both boards empty, no flags set.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard setup placed entirely on Board-1; Board-2 starts empty.
    pub fn new_game() -> Self {
        let mut position = Self::new_empty();
        for side in [Side::White, Side::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                position.put_piece(
                    BoardId::One,
                    Square::new(home_row(side), col as u8),
                    Piece::new(*kind, side),
                );
                position.put_piece(
                    BoardId::One,
                    Square::new(pawn_start_row(side), col as u8),
                    Piece::new(PieceKind::Pawn, side),
                );
            }
        }
        position
    }

    #[inline]
    pub fn board(&self, board: BoardId) -> &Board {
        &self.boards[board.index()]
    }

    #[inline]
    pub fn piece_at(&self, board: BoardId, square: Square) -> Option<Piece> {
        self.boards[board.index()].get(square)
    }

    #[inline]
    pub fn is_empty(&self, board: BoardId, square: Square) -> bool {
        self.boards[board.index()].is_empty(square)
    }

    /// Place a piece, replacing whatever was there.
    #[inline]
    pub fn put_piece(&mut self, board: BoardId, square: Square, piece: Piece) -> Option<Piece> {
        self.boards[board.index()].set(square, Some(piece))
    }

    #[inline]
    pub fn remove_piece(&mut self, board: BoardId, square: Square) -> Option<Piece> {
        self.boards[board.index()].set(square, None)
    }

    /// Every piece on both boards: Board-1 first, each in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardId, Square, Piece)> + '_ {
        BoardId::BOTH.into_iter().flat_map(move |board| {
            self.board(board)
                .pieces()
                .map(move |(square, piece)| (board, square, piece))
        })
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (BoardId, Square, Piece)> + '_ {
        self.pieces().filter(move |(_, _, piece)| piece.side == side)
    }

    #[inline]
    pub fn king_moved(&self, side: Side) -> bool {
        self.king_moved[side.index()]
    }

    #[inline]
    pub fn rook_moved(&self, side: Side, castling_side: CastlingSide) -> bool {
        self.rook_moved[side.index()].get(castling_side)
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }
}
