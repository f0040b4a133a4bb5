//! Perft node counting over `Game`, used to check move generation against
//! published reference counts.

use std::thread;

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(game, depth, &mut total);
    total
}

/// Same counts as [`perft`], with one scoped thread per root move.
pub fn perft_multi_threaded(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(game, depth);
    }

    let root_moves = game.all_valid_moves(game.turn());

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|&mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_move(game, mv, depth, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    })
}

/// Node count below each root move.
pub fn perft_divide(game: &Game, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    game.all_valid_moves(game.turn())
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            perft_move(game, mv, depth, &mut local);
            (mv, local.nodes)
        })
        .collect()
}

fn perft_recurse(game: &Game, depth: u8, counts: &mut PerftCounts) {
    for mv in game.all_valid_moves(game.turn()) {
        perft_move(game, mv, depth, counts);
    }
}

fn perft_move(game: &Game, mv: Move, depth: u8, counts: &mut PerftCounts) {
    if depth == 1 {
        classify_leaf(game, mv, counts);
        return;
    }

    let mut child = game.clone();
    if child.make_move(mv).is_ok() {
        perft_recurse(&child, depth - 1, counts);
    }
}

fn classify_leaf(game: &Game, mv: Move, counts: &mut PerftCounts) {
    let Some(piece) = game.board().piece_at(mv.start) else {
        return;
    };
    let target = game.board().piece_at(mv.end);
    let is_en_passant = piece.kind == PieceKind::Pawn && mv.column_delta() != 0 && target.is_none();

    counts.nodes += 1;
    if target.is_some() || is_en_passant {
        counts.captures += 1;
    }
    if is_en_passant {
        counts.en_passant += 1;
    }
    if piece.kind == PieceKind::King && mv.column_delta().abs() == 2 {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }

    let mut child = game.clone();
    if child.make_move(mv).is_err() {
        return;
    }
    let defender = child.turn();
    if child.is_in_check(defender) {
        counts.checks += 1;
        if child.is_in_checkmate(defender) {
            counts.checkmates += 1;
        }
    }
}
