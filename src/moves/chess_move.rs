use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{PieceKind, Position};

/// A request to move the piece on `start` to `end`.
///
/// `promotion` is set only for a pawn reaching the far rank. Castling is an
/// ordinary king move two columns sideways; en passant is an ordinary
/// diagonal pawn move onto the en passant target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(start: Position, end: Position, kind: PieceKind) -> Self {
        Self {
            start,
            end,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.end.row() as i8 - self.start.row() as i8
    }

    #[inline]
    pub const fn column_delta(self) -> i8 {
        self.end.column() as i8 - self.start.column() as i8
    }
}
