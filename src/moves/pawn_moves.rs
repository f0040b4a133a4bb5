//! Pawn geometry helpers: start/promotion rows and capture squares.

use crate::game_state::chess_types::{Color, Position};

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}

/// Diagonal squares a `color` pawn on `from` attacks, whether or not they are occupied.
pub fn pawn_attacks(color: Color, from: Position) -> impl Iterator<Item = Position> {
    let forward = color.pawn_direction();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_column| from.offset(forward, d_column))
}
