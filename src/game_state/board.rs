//! Piece placement storage.
//!
//! `Board` is a plain 8x8 grid of optional pieces. It has no notion of turn,
//! legality or move history; `Game` layers those on top. Cloning is a fixed
//! 64-cell copy, which is what the legality simulation relies on.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    // [row - 1][column - 1]
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Board in the standard opening configuration.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.reset_to_start();
        board
    }

    /// Put `piece` on `position`, or clear the square with `None`.
    /// Whatever stood there before is overwritten.
    #[inline]
    pub fn place_piece(&mut self, position: Position, piece: Option<Piece>) {
        self.cells[(position.row() - 1) as usize][(position.column() - 1) as usize] = piece;
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.cells[(position.row() - 1) as usize][(position.column() - 1) as usize]
    }

    /// Remove and return whatever stands on `position`.
    #[inline]
    pub fn take_piece(&mut self, position: Position) -> Option<Piece> {
        let piece = self.piece_at(position);
        self.place_piece(position, None);
        piece
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Clear the grid and lay out the 32-piece starting position.
    pub fn reset_to_start(&mut self) {
        self.cells = [[None; 8]; 8];

        for (column_idx, kind) in BACK_RANK.iter().enumerate() {
            let column = column_idx as u8 + 1;
            self.place_piece(Position::new(1, column), Some(Piece::new(Color::White, *kind)));
            self.place_piece(
                Position::new(2, column),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            self.place_piece(
                Position::new(7, column),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            self.place_piece(Position::new(8, column), Some(Piece::new(Color::Black, *kind)));
        }
    }

    /// Every occupied square with its piece, row-major from (1, 1).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First square holding `color`'s king, if any.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}
