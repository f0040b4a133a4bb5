use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Queen rays: rook rays followed by bishop rays.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = generate_queen_directions();

const fn generate_queen_directions() -> [(i8, i8); 8] {
    let mut out = [(0, 0); 8];
    let mut i = 0;
    while i < 4 {
        out[i] = ROOK_DIRECTIONS[i];
        out[i + 4] = BISHOP_DIRECTIONS[i];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;

    #[test]
    fn queen_has_eight_distinct_non_zero_directions() {
        let mut directions = QUEEN_DIRECTIONS.to_vec();
        directions.sort();
        directions.dedup();
        assert_eq!(directions.len(), 8);
        assert!(!directions.contains(&(0, 0)));
    }
}
