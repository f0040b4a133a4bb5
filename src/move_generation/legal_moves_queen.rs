use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, color, from, &QUEEN_DIRECTIONS, out);
}
