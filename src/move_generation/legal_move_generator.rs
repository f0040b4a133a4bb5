//! Legality filter over pseudo-legal generation.
//!
//! Each candidate is played on a cloned board and kept only if the mover's
//! king is not attacked afterwards. The live board is never mutated here.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveContext;
use crate::moves::chess_move::Move;

/// Legal moves of the piece on `from`, whatever its color. Empty for an empty square.
pub fn legal_moves_from<C: MoveContext + ?Sized>(
    board: &Board,
    context: &C,
    from: Position,
) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = piece.pseudo_legal_moves(board, from, context, true);
    moves.retain(|&mv| leaves_king_safe(board, mv, piece.color));
    moves
}

pub fn legal_moves_for_color<C: MoveContext + ?Sized>(
    board: &Board,
    context: &C,
    color: Color,
) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| legal_moves_from(board, context, from))
        .collect()
}

/// Stops at the first legal move found.
pub fn has_any_legal_move<C: MoveContext + ?Sized>(board: &Board, context: &C, color: Color) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        piece
            .pseudo_legal_moves(board, from, context, true)
            .into_iter()
            .any(|mv| leaves_king_safe(board, mv, color))
    })
}

fn leaves_king_safe(board: &Board, mv: Move, color: Color) -> bool {
    let mut simulated = board.clone();
    apply_move(&mut simulated, mv).is_some() && !is_king_in_check(&simulated, color)
}
