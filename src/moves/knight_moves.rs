//! Knight jump pattern.

use crate::game_state::chess_types::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// On-board squares a knight on `from` jumps to, ignoring occupancy.
pub fn knight_targets(from: Position) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_column)| from.offset(d_row, d_column))
}
