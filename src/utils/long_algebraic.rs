//! Long algebraic move notation (`e2e4`, `e7e8q`).
//!
//! Pure text conversion: no board is consulted, so legality is left to
//! `Game::make_move`.

use std::fmt;
use std::str::FromStr;

use crate::errors::NotationError;
use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&position_to_algebraic(mv.start));
    out.push_str(&position_to_algebraic(mv.end));
    if let Some(kind) = mv.promotion {
        out.push(promotion_to_char(kind));
    }
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, NotationError> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(NotationError::InvalidMove(long_algebraic.to_owned()));
    }

    let start = algebraic_to_position(&long_algebraic[0..2])?;
    let end = algebraic_to_position(&long_algebraic[2..4])?;

    match long_algebraic[4..].chars().next() {
        Some(ch) => Ok(Move::with_promotion(start, end, char_to_promotion(ch)?)),
        None => Ok(Move::new(start, end)),
    }
}

fn promotion_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::King => 'k',
        PieceKind::Pawn => 'p',
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, NotationError> {
    match ch.to_ascii_lowercase() {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        _ => Err(NotationError::InvalidPromotionPiece(ch)),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(*self))
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(s)
    }
}
