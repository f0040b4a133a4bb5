//! Board-level move application shared by legality simulation and
//! `Game::make_move`, so both see identical side effects.

use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COLUMN, KINGSIDE_ROOK_TARGET_COLUMN, QUEENSIDE_ROOK_COLUMN,
    QUEENSIDE_ROOK_TARGET_COLUMN,
};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// What `apply_move` did beyond moving the piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub castling_rook: Option<(Position, Position)>,
    pub is_double_step: bool,
}

/// Apply `mv` to `board` without any legality check. Returns `None`, leaving
/// the board untouched, when `mv.start` is empty.
///
/// Order: en passant removal, placement (promoted kind if any), start square
/// cleared, castling rook relocated.
pub fn apply_move(board: &mut Board, mv: Move) -> Option<AppliedMove> {
    let piece = board.piece_at(mv.start)?;
    let mut captured = board.piece_at(mv.end);

    let is_en_passant = piece.kind == PieceKind::Pawn && mv.column_delta() != 0 && captured.is_none();
    if is_en_passant {
        captured = board.take_piece(Position::new(mv.start.row(), mv.end.column()));
    }

    let placed_kind = mv.promotion.unwrap_or(piece.kind);
    board.place_piece(mv.end, Some(Piece::new(piece.color, placed_kind)));
    board.place_piece(mv.start, None);

    let castling_rook = if piece.kind == PieceKind::King && mv.column_delta().abs() == 2 {
        let row = mv.start.row();
        let (rook_column, rook_target_column) = if mv.column_delta() > 0 {
            (KINGSIDE_ROOK_COLUMN, KINGSIDE_ROOK_TARGET_COLUMN)
        } else {
            (QUEENSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_TARGET_COLUMN)
        };
        let rook_from = Position::new(row, rook_column);
        let rook_to = Position::new(row, rook_target_column);
        let rook = board.take_piece(rook_from);
        board.place_piece(rook_to, rook);
        Some((rook_from, rook_to))
    } else {
        None
    };

    Some(AppliedMove {
        piece,
        captured,
        is_en_passant,
        castling_rook,
        is_double_step: piece.kind == PieceKind::Pawn && mv.row_delta().abs() == 2,
    })
}
