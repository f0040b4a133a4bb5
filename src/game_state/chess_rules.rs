//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the back-rank layout used by board setup.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from column 1 to column 8.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may promote to, in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KING_HOME_COLUMN: u8 = 5;
pub const KINGSIDE_ROOK_COLUMN: u8 = 8;
pub const QUEENSIDE_ROOK_COLUMN: u8 = 1;

/// Column the king lands on when castling kingside / queenside.
pub const KINGSIDE_KING_TARGET_COLUMN: u8 = 7;
pub const QUEENSIDE_KING_TARGET_COLUMN: u8 = 3;

/// Column the rook lands on when castling kingside / queenside.
pub const KINGSIDE_ROOK_TARGET_COLUMN: u8 = 6;
pub const QUEENSIDE_ROOK_TARGET_COLUMN: u8 = 4;
