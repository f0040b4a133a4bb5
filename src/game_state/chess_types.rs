//! Core value types shared by every subsystem: colors, piece kinds, pieces
//! and board coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::NotationError;

pub use crate::game_state::board::Board;
pub use crate::game_state::castling_state::CastlingState;
pub use crate::game_state::game::Game;

/// Side owning a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this color's king and rooks at the start of a game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Row step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A colored piece. Its square is owned by the [`Board`], not the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

/// A board square, 1-based: row 1 is White's back rank, column 1 is the a-file.
///
/// Callers must keep both coordinates within `1..=8`; [`Position::offset`] is
/// the checked way to step off an existing square.
///
/// Serialized as a `(row, column)` pair; deserializing checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        debug_assert!(row >= 1 && row <= 8 && column >= 1 && column <= 8);
        Self { row, column }
    }

    /// Checked constructor for untrusted coordinates.
    #[inline]
    pub fn try_new(row: i8, column: i8) -> Option<Self> {
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The square `(d_row, d_column)` away, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.column as i8 + d_column)
    }

    /// Every square, row-major from (1, 1) to (8, 8).
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |column| Position::new(row, column)))
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = NotationError;

    fn try_from((row, column): (u8, u8)) -> Result<Self, Self::Error> {
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Ok(Position::new(row, column))
        } else {
            Err(NotationError::InvalidSquare(format!("({row}, {column})")))
        }
    }
}

impl From<Position> for (u8, u8) {
    fn from(position: Position) -> Self {
        (position.row, position.column)
    }
}
