//! Game orchestration: turn order, special-move bookkeeping and the public
//! rules API (`valid_moves`, `make_move`, check/checkmate/stalemate queries).
//!
//! A `Game` owns its board outright and has no shared or global state, so one
//! instance per match is all the service layer needs. It is not internally
//! synchronised; callers serialise `make_move`/`set_board` on a given instance.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidMoveError, NotationError};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    has_any_legal_move, legal_moves_for_color, legal_moves_from,
};
use crate::move_generation::move_generator::MoveContext;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Externally observable state of a game, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The side to move has at least one legal move and is not in check.
    AwaitingMove(Color),
    /// The side to move is in check but can escape.
    Check(Color),
    /// The contained color is checkmated.
    Checkmate(Color),
    /// The contained color is to move, not in check, and has no legal move.
    Stalemate(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
    // Indexed by `Color::index`.
    castling: [CastlingState; 2],
    en_passant_target: Option<Position>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, all rights intact.
    pub fn new() -> Self {
        Self::with_board(Board::new_game(), Color::White)
    }

    /// Arbitrary placement with fresh castling rights and no en passant target.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            castling: [CastlingState::default(); 2],
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the placement. Castling flags and the en passant target are
    /// reset unconditionally; use `set_castling_state` and
    /// `set_en_passant_target` afterwards to restore tracked history.
    /// The side to move is kept.
    pub fn set_board(&mut self, board: Board) {
        debug!("board replaced, castling rights and en passant target reset");
        self.board = board;
        self.castling = [CastlingState::default(); 2];
        self.en_passant_target = None;
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    pub fn castling_state(&self, color: Color) -> CastlingState {
        self.castling[color.index()]
    }

    #[inline]
    pub fn set_castling_state(&mut self, color: Color, state: CastlingState) {
        self.castling[color.index()] = state;
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<Position>) {
        self.en_passant_target = target;
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub(crate) fn set_clocks(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Legal moves of whatever piece stands on `from`, regardless of whose
    /// turn it is. Empty when the square is empty.
    pub fn valid_moves(&self, from: Position) -> Vec<Move> {
        legal_moves_from(&self.board, self, from)
    }

    /// Legal moves of every `color` piece.
    pub fn all_valid_moves(&self, color: Color) -> Vec<Move> {
        legal_moves_for_color(&self.board, self, color)
    }

    /// Play `mv` for the side to move. On error nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMoveError> {
        self.validate_move(mv)
            .inspect_err(|err| trace!("rejected {mv}: {err}"))?;

        let applied =
            apply_move(&mut self.board, mv).ok_or(InvalidMoveError::NoPieceAtStart(mv.start))?;
        let piece = applied.piece;

        if let Some((rook_from, rook_to)) = applied.castling_rook {
            trace!("{} castles, rook {rook_from} -> {rook_to}", piece.color);
        }
        if applied.is_en_passant {
            trace!("{} captures en passant with {mv}", piece.color);
        }

        self.en_passant_target = if applied.is_double_step {
            Position::try_new(
                ((mv.start.row() + mv.end.row()) / 2) as i8,
                mv.start.column() as i8,
            )
        } else {
            None
        };

        self.update_castling_state(piece, mv, applied.captured);
        self.update_clocks(piece, applied.captured.is_some());

        debug!("{} played {mv}", piece.color);
        self.turn = self.turn.opposite();
        Ok(())
    }

    fn validate_move(&self, mv: Move) -> Result<(), InvalidMoveError> {
        let piece = self
            .board
            .piece_at(mv.start)
            .ok_or(InvalidMoveError::NoPieceAtStart(mv.start))?;

        if piece.color != self.turn {
            return Err(InvalidMoveError::NotPlayersTurn {
                position: mv.start,
                color: piece.color,
            });
        }

        if !self.valid_moves(mv.start).contains(&mv) {
            return Err(InvalidMoveError::MoveNotLegal(mv));
        }

        Ok(())
    }

    fn update_castling_state(&mut self, piece: Piece, mv: Move, captured: Option<Piece>) {
        let mover = &mut self.castling[piece.color.index()];
        match piece.kind {
            PieceKind::King => mover.king_moved = true,
            PieceKind::Rook if mv.start.row() == piece.color.home_row() => {
                mark_rook_moved(mover, mv.start.column());
            }
            _ => {}
        }

        // A rook captured on its corner can never castle either.
        if let Some(victim) = captured {
            if victim.kind == PieceKind::Rook && mv.end.row() == victim.color.home_row() {
                mark_rook_moved(&mut self.castling[victim.color.index()], mv.end.column());
            }
        }
    }

    fn update_clocks(&mut self, piece: Piece, was_capture: bool) {
        if piece.kind == PieceKind::Pawn || was_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if piece.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }

    /// True when `color`'s king is attacked. A board without that king is
    /// never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !has_any_legal_move(&self.board, self, color)
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !has_any_legal_move(&self.board, self, color)
    }

    /// Status of the side to move. Terminal states do not block further calls.
    pub fn status(&self) -> GameStatus {
        let turn = self.turn;
        let in_check = self.is_in_check(turn);
        let can_move = has_any_legal_move(&self.board, self, turn);

        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate(turn),
            (false, false) => GameStatus::Stalemate(turn),
            (true, true) => GameStatus::Check(turn),
            (false, true) => GameStatus::AwaitingMove(turn),
        }
    }
}

fn mark_rook_moved(state: &mut CastlingState, column: u8) {
    match column {
        KINGSIDE_ROOK_COLUMN => state.kingside_rook_moved = true,
        QUEENSIDE_ROOK_COLUMN => state.queenside_rook_moved = true,
        _ => {}
    }
}

impl MoveContext for Game {
    fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    fn castling_state(&self, color: Color) -> CastlingState {
        self.castling[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::{Game, GameStatus};
    use crate::errors::InvalidMoveError;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;

    fn mv(text: &str) -> Move {
        text.parse().expect("test move should parse")
    }

    fn sq(text: &str) -> Position {
        text.parse().expect("test square should parse")
    }

    fn play(game: &mut Game, moves: &[&str]) {
        for text in moves {
            game.make_move(mv(text))
                .unwrap_or_else(|err| panic!("{text} should be legal: {err}"));
        }
    }

    #[test]
    fn new_game_has_twenty_white_moves() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.all_valid_moves(Color::White).len(), 20);
    }

    #[test]
    fn valid_moves_ignore_whose_turn_it_is() {
        let game = Game::new();
        assert_eq!(game.valid_moves(sq("g8")).len(), 2);
        assert!(game.valid_moves(sq("e4")).is_empty());
    }

    #[test]
    fn make_move_errors_leave_the_game_untouched() {
        let mut game = Game::new();

        assert_eq!(
            game.make_move(mv("e3e4")),
            Err(InvalidMoveError::NoPieceAtStart(sq("e3")))
        );
        assert_eq!(
            game.make_move(mv("e7e5")),
            Err(InvalidMoveError::NotPlayersTurn {
                position: sq("e7"),
                color: Color::Black,
            })
        );
        assert_eq!(
            game.make_move(mv("e2e5")),
            Err(InvalidMoveError::MoveNotLegal(mv("e2e5")))
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn self_check_is_rejected() {
        let mut game = Game::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("fen parses");

        assert!(game.valid_moves(sq("e2")).is_empty());
        assert_eq!(
            game.make_move(mv("e2d3")),
            Err(InvalidMoveError::MoveNotLegal(mv("e2d3")))
        );
    }

    #[test]
    fn turn_alternates() {
        let mut game = Game::new();
        play(&mut game, &["e2e4"]);
        assert_eq!(game.turn(), Color::Black);
        play(&mut game, &["e7e5"]);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn en_passant_target_lives_exactly_one_ply() {
        let mut game = Game::new();
        play(&mut game, &["e2e4"]);
        assert_eq!(game.en_passant_target(), Some(sq("e3")));
        play(&mut game, &["e7e6"]);
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn en_passant_capture_removes_the_double_stepped_pawn() {
        let mut game = Game::new();
        play(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "c2c4"]);

        assert!(game.valid_moves(sq("d4")).contains(&mv("d4c3")));
        play(&mut game, &["d4c3"]);

        assert!(game.board().is_empty_at(sq("c4")));
        assert!(game.board().is_empty_at(sq("d4")));
        assert_eq!(
            game.board().piece_at(sq("c3")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut game = Game::new();
        play(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "c2c4", "h7h6", "h2h3"]);

        assert!(!game.valid_moves(sq("d4")).contains(&mv("d4c3")));
    }

    #[test]
    fn kingside_castle_moves_the_rook_and_spends_rights() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);

        assert!(game.valid_moves(sq("e1")).contains(&mv("e1g1")));
        play(&mut game, &["e1g1"]);

        assert_eq!(
            game.board().piece_at(sq("g1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            game.board().piece_at(sq("f1")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert!(game.board().is_empty_at(sq("h1")));
        assert_eq!(game.halfmove_clock(), 5);
        assert_eq!(game.fullmove_number(), 4);
        assert!(game.castling_state(Color::White).king_moved);
        assert!(!game.castling_state(Color::Black).king_moved);
    }

    #[test]
    fn king_that_moved_and_returned_can_never_castle() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
        play(&mut game, &["e1e2", "f8c5", "e2e1", "a7a6"]);

        assert_eq!(game.turn(), Color::White);
        assert!(!game.valid_moves(sq("e1")).contains(&mv("e1g1")));
        assert!(game.valid_moves(sq("e1")).contains(&mv("e1e2")));
    }

    #[test]
    fn rook_that_moved_and_returned_spends_only_its_side() {
        let mut game =
            Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").expect("fen parses");
        play(&mut game, &["h1g1", "a7a6", "g1h1", "a6a5"]);

        let king_moves = game.valid_moves(sq("e1"));
        assert!(!king_moves.contains(&mv("e1g1")));
        assert!(king_moves.contains(&mv("e1c1")));
        assert!(game.castling_state(Color::White).kingside_rook_moved);
        assert!(!game.castling_state(Color::White).queenside_rook_moved);
    }

    #[test]
    fn queenside_castle_relocates_the_rook() {
        let mut game =
            Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").expect("fen parses");
        play(&mut game, &["e1c1", "e8c8"]);

        assert_eq!(
            game.board().piece_at(sq("d1")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            game.board().piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert!(game.board().is_empty_at(sq("a1")));
        assert!(game.board().is_empty_at(sq("a8")));
    }

    #[test]
    fn capturing_a_corner_rook_removes_that_castling_right() {
        let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen parses");
        play(&mut game, &["a1a8"]);

        let black = game.castling_state(Color::Black);
        assert!(black.queenside_rook_moved);
        assert!(!black.kingside_rook_moved);
        assert!(game.castling_state(Color::White).queenside_rook_moved);
        assert!(game.is_in_check(Color::Black));
        assert!(!game.valid_moves(sq("e8")).contains(&mv("e8c8")));
    }

    #[test]
    fn promotion_needs_an_explicit_piece() {
        let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("fen parses");

        assert_eq!(
            game.make_move(mv("a7a8")),
            Err(InvalidMoveError::MoveNotLegal(mv("a7a8")))
        );
        assert_eq!(game.valid_moves(sq("a7")).len(), 4);

        play(&mut game, &["a7a8n"]);
        assert_eq!(
            game.board().piece_at(sq("a8")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert!(game.board().is_empty_at(sq("a7")));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        assert!(game.is_in_check(Color::White));
        assert!(game.is_in_checkmate(Color::White));
        assert!(!game.is_in_stalemate(Color::White));
        assert!(!game.is_in_checkmate(Color::Black));
        assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
    }

    #[test]
    fn king_in_corner_with_no_moves_is_stalemate() {
        let mut board = Board::new_empty();
        board.place_piece(sq("a1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.place_piece(sq("c2"), Some(Piece::new(Color::Black, PieceKind::King)));
        board.place_piece(sq("b3"), Some(Piece::new(Color::Black, PieceKind::Queen)));
        let game = Game::with_board(board, Color::White);

        assert!(game.valid_moves(sq("a1")).is_empty());
        assert!(!game.is_in_check(Color::White));
        assert!(game.is_in_stalemate(Color::White));
        assert!(!game.is_in_checkmate(Color::White));
        assert_eq!(game.status(), GameStatus::Stalemate(Color::White));
    }

    #[test]
    fn status_reports_check_with_escapes() {
        let mut game = Game::new();
        assert_eq!(game.status(), GameStatus::AwaitingMove(Color::White));

        play(&mut game, &["e2e4", "f7f5", "d1h5"]);

        assert_eq!(game.status(), GameStatus::Check(Color::Black));
        assert!(game.valid_moves(sq("g7")).contains(&mv("g7g6")));
    }

    #[test]
    fn set_board_resets_special_move_state_but_not_turn() {
        let mut game =
            Game::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R b - d6 0 1").expect("fen parses");
        let board = game.board().clone();

        game.set_board(board);

        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.castling_state(Color::White), CastlingState::default());
        assert_eq!(game.castling_state(Color::Black), CastlingState::default());
    }

    #[test]
    fn restored_castling_state_is_honoured_after_set_board() {
        let mut game = Game::new();
        game.set_board(Board::from_fen_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement parses"));
        game.set_castling_state(
            Color::White,
            CastlingState {
                kingside_rook_moved: true,
                ..CastlingState::default()
            },
        );

        let king_moves = game.valid_moves(sq("e1"));
        assert!(king_moves.contains(&mv("e1c1")));
        assert!(!king_moves.contains(&mv("e1g1")));
    }

    #[test]
    fn random_playouts_never_leave_the_mover_in_check() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..8 {
            let mut game = Game::new();

            for _ in 0..80 {
                let mover = game.turn();
                for (from, _) in game.board().pieces_of(mover) {
                    assert!(game.valid_moves(from).iter().all(|m| m.start == from));
                }

                let moves = game.all_valid_moves(mover);
                let Some(&choice) = moves.choose(&mut rng) else {
                    assert!(matches!(
                        game.status(),
                        GameStatus::Checkmate(_) | GameStatus::Stalemate(_)
                    ));
                    break;
                };

                game.make_move(choice)
                    .unwrap_or_else(|err| panic!("{choice} was offered but refused: {err}"));

                assert!(!game.is_in_check(mover), "{choice} left {mover} in check");
                assert_eq!(game.turn(), mover.opposite());
                if game.en_passant_target().is_some() {
                    assert_eq!(choice.row_delta().abs(), 2);
                }
            }
        }
    }

    #[test]
    fn mid_game_state_survives_serialization() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "e7e5", "e1e2", "d7d5"]);

        let json = serde_json::to_string(&game).expect("game serializes");
        let restored: Game = serde_json::from_str(&json).expect("game deserializes");

        assert_eq!(restored, game);
        assert!(restored.castling_state(Color::White).king_moved);
        assert_eq!(restored.en_passant_target(), Some(sq("d6")));
    }
}
