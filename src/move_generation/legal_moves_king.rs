use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET_COLUMN, KINGSIDE_ROOK_COLUMN, KING_HOME_COLUMN,
    QUEENSIDE_KING_TARGET_COLUMN, QUEENSIDE_ROOK_COLUMN,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::move_generation::move_generator::MoveContext;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves<C: MoveContext + ?Sized>(
    board: &Board,
    from: Position,
    color: Color,
    context: &C,
    include_castling: bool,
    out: &mut Vec<Move>,
) {
    for to in king_targets(from) {
        push_unless_own_piece(board, color, from, to, out);
    }

    if include_castling {
        generate_castling_moves(board, from, color, context, out);
    }
}

fn generate_castling_moves<C: MoveContext + ?Sized>(
    board: &Board,
    from: Position,
    color: Color,
    context: &C,
    out: &mut Vec<Move>,
) {
    let home = Position::new(color.home_row(), KING_HOME_COLUMN);
    if from != home {
        return;
    }

    let rights = context.castling_state(color);
    if !rights.can_castle_kingside() && !rights.can_castle_queenside() {
        return;
    }

    if is_square_attacked(board, from, color.opposite()) {
        return;
    }

    if rights.can_castle_kingside()
        && castling_path_is_open(board, color, KINGSIDE_ROOK_COLUMN, KINGSIDE_KING_TARGET_COLUMN)
    {
        out.push(Move::new(from, Position::new(from.row(), KINGSIDE_KING_TARGET_COLUMN)));
    }

    if rights.can_castle_queenside()
        && castling_path_is_open(board, color, QUEENSIDE_ROOK_COLUMN, QUEENSIDE_KING_TARGET_COLUMN)
    {
        out.push(Move::new(from, Position::new(from.row(), QUEENSIDE_KING_TARGET_COLUMN)));
    }
}

/// Own rook in the corner, every square between king and rook empty, and
/// neither the transit nor the landing square attacked.
fn castling_path_is_open(
    board: &Board,
    color: Color,
    rook_column: u8,
    king_target_column: u8,
) -> bool {
    let row = color.home_row();

    if board.piece_at(Position::new(row, rook_column)) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    let (low, high) = if rook_column > KING_HOME_COLUMN {
        (KING_HOME_COLUMN + 1, rook_column - 1)
    } else {
        (rook_column + 1, KING_HOME_COLUMN - 1)
    };
    if (low..=high).any(|column| !board.is_empty_at(Position::new(row, column))) {
        return false;
    }

    let (first, last) = if king_target_column > KING_HOME_COLUMN {
        (KING_HOME_COLUMN + 1, king_target_column)
    } else {
        (king_target_column, KING_HOME_COLUMN - 1)
    };
    let attacker = color.opposite();
    (first..=last).all(|column| !is_square_attacked(board, Position::new(row, column), attacker))
}
