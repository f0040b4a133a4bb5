//! Attack and check detection.
//!
//! These are free functions over a `Board` so legality simulation never needs
//! a `Game`. Non-pawn attackers are asked for their pseudo-legal moves with
//! castling excluded; pawns attack their two forward diagonals whether or not
//! anything stands there.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::NullMoveContext;
use crate::moves::pawn_moves::pawn_attacks;

/// True if any `attacker` piece could move to or capture on `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker: Color) -> bool {
    board.pieces_of(attacker).any(|(from, piece)| match piece.kind {
        PieceKind::Pawn => pawn_attacks(attacker, from).any(|to| to == square),
        _ => piece
            .pseudo_legal_moves(board, from, &NullMoveContext, false)
            .iter()
            .any(|mv| mv.end == square),
    })
}

/// True when `color` has a king on the board and it is attacked.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_position(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}
