use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        push_unless_own_piece(board, color, from, to, out);
    }
}
