//! King step pattern. Castling is handled by move generation, not here.

use crate::game_state::chess_types::Position;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn king_targets(from: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_column)| from.offset(d_row, d_column))
}
