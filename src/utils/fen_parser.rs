//! FEN-to-Game parser.
//!
//! Builds a `Game` from a Forsyth-Edwards Notation string: placement, side
//! to move, castling rights, en passant target and (optionally) clocks.
//! Absent castling letters mark the matching rook as moved.

use crate::errors::NotationError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> Result<Game, NotationError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let turn = parse_side_to_move(side_part)?;
    let mut game = Game::with_board(board, turn);

    for (color, rights) in parse_castling_rights(castling_part)? {
        game.set_castling_state(color, rights);
    }
    game.set_en_passant_target(parse_en_passant_target(en_passant_part)?);

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;
    game.set_clocks(halfmove_clock, fullmove_number);

    Ok(game)
}

/// Parse the placement field only (`rnbqkbnr/pppppppp/8/...`).
pub fn parse_board(board_part: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::new_empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 8 - fen_rank_idx as u8;
        let mut column = 1u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                column += empty_count as u8;
                if column > 9 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if column > 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.place_piece(Position::new(row, column), Some(piece));
            column += 1;
        }

        if column != 9 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

impl Board {
    pub fn from_fen_placement(placement: &str) -> Result<Self, NotationError> {
        parse_board(placement)
    }
}

fn parse_side_to_move(side_part: &str) -> Result<Color, NotationError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<[(Color, CastlingState); 2], NotationError> {
    let lost = CastlingState {
        king_moved: false,
        kingside_rook_moved: true,
        queenside_rook_moved: true,
    };
    let mut white = lost;
    let mut black = lost;

    if castling_part == "-" {
        return Ok([(Color::White, white), (Color::Black, black)]);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => white.kingside_rook_moved = false,
            'Q' => white.queenside_rook_moved = false,
            'k' => black.kingside_rook_moved = false,
            'q' => black.queenside_rook_moved = false,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok([(Color::White, white), (Color::Black, black)])
}

fn parse_en_passant_target(en_passant_part: &str) -> Result<Option<Position>, NotationError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_position(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

fn invalid(reason: &str) -> NotationError {
    NotationError::InvalidFen(reason.to_owned())
}

#[cfg(test)]
mod tests {
    use super::{parse_board, parse_fen};
    use crate::errors::NotationError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_board;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(game.board()));

        assert_eq!(game, Game::new());
    }

    #[test]
    fn missing_rights_and_en_passant_are_carried_over() {
        let game = parse_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 3 20").expect("fen should parse");

        assert!(game.castling_state(Color::White).can_castle_kingside());
        assert!(!game.castling_state(Color::White).can_castle_queenside());
        assert!(!game.castling_state(Color::Black).can_castle_kingside());
        assert!(game.castling_state(Color::Black).can_castle_queenside());
        assert_eq!(game.en_passant_target(), Some(Position::new(6, 4)));
        assert_eq!(game.halfmove_clock(), 3);
        assert_eq!(game.fullmove_number(), 20);
    }

    #[test]
    fn clocks_are_optional() {
        let game = parse_fen("8/8/8/8/8/8/8/K6k b - -").expect("four-field fen should parse");
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.fullmove_number(), 1);
    }

    #[test]
    fn malformed_placement_is_rejected() {
        assert!(matches!(parse_board("8/8/8/8/8/8/8"), Err(NotationError::InvalidFen(_))));
        assert!(matches!(parse_board("9/8/8/8/8/8/8/8"), Err(NotationError::InvalidFen(_))));
        assert!(matches!(parse_board("ppppppppp/8/8/8/8/8/8/8"), Err(NotationError::InvalidFen(_))));
        assert!(matches!(parse_board("x7/8/8/8/8/8/8/8"), Err(NotationError::InvalidFen(_))));
    }

    #[test]
    fn long_runs_of_empty_counts_are_rejected() {
        assert!(matches!(parse_board("53/8/8/8/8/8/8/8"), Err(NotationError::InvalidFen(_))));

        for repeats in [33, 40] {
            let placement = format!("{}/8/8/8/8/8/8/8", "8".repeat(repeats));
            assert!(matches!(parse_board(&placement), Err(NotationError::InvalidFen(_))));
        }
    }
}
