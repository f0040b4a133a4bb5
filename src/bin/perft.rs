//! Perft runner for checking the rules engine against reference counts.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 4 --fen "<fen>" --divide`
//!
//! Set `RUST_LOG=debug` to see engine logging.

use std::time::Instant;

use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::move_generation::perft::{perft_divide, perft_multi_threaded};
use plum_rules::utils::render_game_state::render_board;
use plum_rules::Game;

fn parse_arg_u8(args: &[String], flag: &str, default: u8) -> u8 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_str<'a>(args: &'a [String], flag: &str, default: &'a str) -> &'a str {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return &args[i + 1];
        }
    }
    default
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let depth = parse_arg_u8(&args, "--depth", 3);
    let fen = parse_arg_str(&args, "--fen", STARTING_POSITION_FEN);
    let divide = args.iter().any(|arg| arg == "--divide");

    let game = Game::from_fen(fen).map_err(|e| e.to_string())?;
    println!("{}\n{}", render_board(game.board()), game.to_fen());

    if divide {
        let mut lines = perft_divide(&game, depth);
        lines.sort_by_key(|(mv, _)| mv.to_string());
        for (mv, nodes) in &lines {
            println!("{mv}: {nodes}");
        }
    }

    let started = Instant::now();
    let counts = perft_multi_threaded(&game, depth);
    let elapsed_ms = started.elapsed().as_millis();

    println!(
        "depth={depth} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={} elapsed_ms={elapsed_ms}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
    );
    Ok(())
}
