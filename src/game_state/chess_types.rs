//! Core value types shared by the rule engine and search.
//!
//! Everything here is a small `Copy` value. The two boards themselves live in
//! `Position`, which owns them and is cloned per explored search node.

use std::fmt;

pub use crate::game_state::position::{Board, Position};

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (side is carried separately in `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

/// Algebraic name: column 0 is file `a`, row 0 is rank `8`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'8' - self.row)
        )
    }
}

/// One of the two coupled boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardId {
    One,
    Two,
}

impl BoardId {
    pub const BOTH: [BoardId; 2] = [BoardId::One, BoardId::Two];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            BoardId::One => 0,
            BoardId::Two => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            BoardId::One => BoardId::Two,
            BoardId::Two => BoardId::One,
        }
    }

    /// Human-facing board number (1 or 2).
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            BoardId::One => 1,
            BoardId::Two => 2,
        }
    }

    #[inline]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(BoardId::One),
            2 => Some(BoardId::Two),
            _ => None,
        }
    }
}

/// A move of the piece standing on `board` at `from` to `to`.
///
/// `board` is the board the piece occupies before moving; the board it lands
/// on follows from the move type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: BoardId,
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(board: BoardId, from: Square, to: Square) -> Self {
        Self { board, from, to }
    }
}

/// `"<board>:<from><to>"`, e.g. `1:e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.board.number(), self.from, self.to)
    }
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];
}

/// Per-side "rook has moved" pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RookMoved {
    pub kingside: bool,
    pub queenside: bool,
}

impl RookMoved {
    #[inline]
    pub fn get(self, castling_side: CastlingSide) -> bool {
        match castling_side {
            CastlingSide::Kingside => self.kingside,
            CastlingSide::Queenside => self.queenside,
        }
    }

    #[inline]
    pub fn set(&mut self, castling_side: CastlingSide) {
        match castling_side {
            CastlingSide::Kingside => self.kingside = true,
            CastlingSide::Queenside => self.queenside = true,
        }
    }
}
