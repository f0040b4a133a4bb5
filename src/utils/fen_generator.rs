use crate::game_state::chess_types::*;
use crate::utils::algebraic::position_to_algebraic;

pub fn generate_fen(game: &Game) -> String {
    let board = generate_board_field(game.board());
    let side_to_move = match game.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game);
    let en_passant = game
        .en_passant_target()
        .map(position_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game.halfmove_clock(),
        game.fullmove_number()
    )
}

/// Placement field only.
pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (1..=8u8).rev() {
        let mut empty_count = 0u8;

        for column in 1..=8u8 {
            if let Some(piece) = board.piece_at(Position::new(row, column)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 1 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(game: &Game) -> String {
    let white = game.castling_state(Color::White);
    let black = game.castling_state(Color::Black);
    let mut out = String::new();

    if white.can_castle_kingside() {
        out.push('K');
    }
    if white.can_castle_queenside() {
        out.push('Q');
    }
    if black.can_castle_kingside() {
        out.push('k');
    }
    if black.can_castle_queenside() {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}
