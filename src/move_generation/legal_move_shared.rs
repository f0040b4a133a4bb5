use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Push `from -> to` unless `to` holds a piece of `color`.
#[inline]
pub fn push_unless_own_piece(
    board: &Board,
    color: Color,
    from: Position,
    to: Position,
    out: &mut Vec<Move>,
) {
    match board.piece_at(to) {
        Some(piece) if piece.color == color => {}
        _ => out.push(Move::new(from, to)),
    }
}

/// Walk each ray until the edge or the first occupied square, which is
/// included only when it holds an opposing piece.
pub fn push_sliding_moves(
    board: &Board,
    color: Color,
    from: Position,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_column) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_column) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
