use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveContext;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{pawn_attacks, pawn_promotion_row, pawn_start_row};

pub fn generate_pawn_moves<C: MoveContext + ?Sized>(
    board: &Board,
    from: Position,
    color: Color,
    context: &C,
    out: &mut Vec<Move>,
) {
    let forward = color.pawn_direction();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            push_pawn_move(from, one_step, color, out);

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    let en_passant_target = context.en_passant_target();
    for to in pawn_attacks(color, from) {
        match board.piece_at(to) {
            Some(piece) if piece.color != color => push_pawn_move(from, to, color, out),
            Some(_) => {}
            None => {
                if en_passant_target == Some(to) && has_en_passant_victim(board, color, from, to) {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

// The double-stepped pawn sits beside the capturer, behind the target square.
fn has_en_passant_victim(board: &Board, color: Color, from: Position, to: Position) -> bool {
    let victim_square = Position::new(from.row(), to.column());
    board.piece_at(victim_square) == Some(Piece::new(color.opposite(), PieceKind::Pawn))
}

#[inline]
fn push_pawn_move(from: Position, to: Position, color: Color, out: &mut Vec<Move>) {
    if to.row() == pawn_promotion_row(color) {
        for kind in PROMOTION_KINDS {
            out.push(Move::with_promotion(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
