//! Pseudo-legal move generation entry point.
//!
//! `Piece::pseudo_legal_moves` produces every move a piece's pattern allows
//! on the current occupancy, without asking whether the mover's king ends up
//! in check. Filtering for legality lives in `legal_move_generator`.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// History that placement alone cannot tell: the en passant target and the
/// castling flags. Only pawn and king generation consult it.
pub trait MoveContext {
    fn en_passant_target(&self) -> Option<Position>;
    fn castling_state(&self, color: Color) -> CastlingState;
}

/// Context with no en passant target and every castling right spent.
/// Suitable for attack detection, which never needs either.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMoveContext;

impl MoveContext for NullMoveContext {
    fn en_passant_target(&self) -> Option<Position> {
        None
    }

    fn castling_state(&self, _color: Color) -> CastlingState {
        CastlingState {
            king_moved: true,
            kingside_rook_moved: true,
            queenside_rook_moved: true,
        }
    }
}

impl Piece {
    /// Moves this piece could make from `from` by pattern and occupancy alone.
    ///
    /// `include_castling` must be `false` whenever the result feeds attack
    /// detection, otherwise castling safety and attack tests recurse into
    /// each other.
    pub fn pseudo_legal_moves<C: MoveContext + ?Sized>(
        &self,
        board: &Board,
        from: Position,
        context: &C,
        include_castling: bool,
    ) -> Vec<Move> {
        let mut out = Vec::with_capacity(32);
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, self.color, context, &mut out),
            PieceKind::Knight => generate_knight_moves(board, from, self.color, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, self.color, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, self.color, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, self.color, &mut out),
            PieceKind::King => {
                generate_king_moves(board, from, self.color, context, include_castling, &mut out)
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::NullMoveContext;
    use crate::game_state::chess_types::*;

    fn lone_piece_move_count(kind: PieceKind) -> usize {
        let d4 = Position::new(4, 4);
        let mut board = Board::new_empty();
        let piece = Piece::new(Color::White, kind);
        board.place_piece(d4, Some(piece));
        piece
            .pseudo_legal_moves(&board, d4, &NullMoveContext, true)
            .len()
    }

    #[test]
    fn lone_pieces_on_d4_have_textbook_mobility() {
        assert_eq!(lone_piece_move_count(PieceKind::Queen), 27);
        assert_eq!(lone_piece_move_count(PieceKind::Rook), 14);
        assert_eq!(lone_piece_move_count(PieceKind::Bishop), 13);
        assert_eq!(lone_piece_move_count(PieceKind::Knight), 8);
        assert_eq!(lone_piece_move_count(PieceKind::King), 8);
    }

    #[test]
    fn slider_stops_on_capture_and_before_own_piece() {
        let a1 = Position::new(1, 1);
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let mut board = Board::new_empty();
        board.place_piece(a1, Some(rook));
        board.place_piece(Position::new(4, 1), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.place_piece(Position::new(1, 3), Some(Piece::new(Color::White, PieceKind::Knight)));

        let mut ends: Vec<Position> = rook
            .pseudo_legal_moves(&board, a1, &NullMoveContext, true)
            .into_iter()
            .map(|mv| mv.end)
            .collect();
        ends.sort();

        assert_eq!(
            ends,
            vec![
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(4, 1),
            ]
        );
    }

    #[test]
    fn starting_knight_jumps_over_its_pawns() {
        let board = Board::new_game();
        let b1 = Position::new(1, 2);
        let knight = board.piece_at(b1).expect("knight on b1");

        let moves = knight.pseudo_legal_moves(&board, b1, &NullMoveContext, true);
        assert_eq!(moves.len(), 2);
    }
}
