use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, color, from, &ROOK_DIRECTIONS, out);
}
