//! Errors used throughout the rules engine.
//!
//! `InvalidMoveError` is the only failure `Game::make_move` reports; every
//! variant is recoverable and a failed call leaves the game untouched.
//! `NotationError` covers text input (FEN, algebraic squares and moves) handed
//! in by the service layer.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};
use crate::moves::chess_move::Move;

/// Why `Game::make_move` refused a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    /// The start square is empty.
    #[error("no piece at start position {0}")]
    NoPieceAtStart(Position),

    /// The piece on the start square belongs to the side not on move.
    #[error("piece at {position} is {color}, but it is not {color}'s turn")]
    NotPlayersTurn { position: Position, color: Color },

    /// The move is not among the legal moves of the piece on its start square,
    /// either because of its shape or because it would leave the own king in check.
    #[error("move {0} is not legal")]
    MoveNotLegal(Move),
}

/// Failure to read chess notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid long algebraic move: {0:?}")]
    InvalidMove(String),

    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotionPiece(char),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
