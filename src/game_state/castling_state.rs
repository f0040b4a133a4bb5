use serde::{Deserialize, Serialize};

/// Per-color castling bookkeeping. Flags only ever go from `false` to `true`
/// during play; `Game::set_board` is the single place that clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingState {
    pub king_moved: bool,
    pub kingside_rook_moved: bool,
    pub queenside_rook_moved: bool,
}

impl CastlingState {
    #[inline]
    pub const fn can_castle_kingside(self) -> bool {
        !self.king_moved && !self.kingside_rook_moved
    }

    #[inline]
    pub const fn can_castle_queenside(self) -> bool {
        !self.king_moved && !self.queenside_rook_moved
    }
}
