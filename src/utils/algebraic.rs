//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Position`
//! values reused by FEN and long algebraic move handling.

use std::fmt;
use std::str::FromStr;

use crate::errors::NotationError;
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Ok(Position::new(rank - b'0', file - b'a' + 1))
}

/// Convert a position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.column() - 1);
    let rank_char = char::from(b'0' + position.row());
    format!("{file_char}{rank_char}")
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&position_to_algebraic(*self))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}
