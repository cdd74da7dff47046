//! Command-line match runner: pits two engines against each other and prints
//! the game.

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chessbot::engines::engine_minimax::MinimaxEngine;
use chessbot::engines::engine_random::RandomEngine;
use chessbot::engines::engine_trait::Engine;
use chessbot::errors::ChessResult;
use chessbot::game_state::position::Position;
use chessbot::utils::engine_match_harness::{play_engine_match_observed, MatchConfig};
use chessbot::utils::fen_generator::generate_fen;
use chessbot::utils::fen_parser::parse_fen;
use chessbot::utils::render_game_state::render_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Random,
    Material,
    PawnPusher,
}

/// Play one engine match and print every position.
#[derive(Debug, Parser)]
#[command(name = "chessbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine playing White
    #[arg(long, value_enum, default_value_t = PlayerKind::Material)]
    white: PlayerKind,

    /// Engine playing Black
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    black: PlayerKind,

    /// Search depth in plies for minimax engines
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Starting position; defaults to the standard setup
    #[arg(long)]
    fen: Option<String>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: u16,

    /// Seed for random engines
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final result
    #[arg(long)]
    quiet: bool,
}

fn build_engine(kind: PlayerKind, depth: u8, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
        PlayerKind::Material => Box::new(MinimaxEngine::material(depth)),
        PlayerKind::PawnPusher => Box::new(MinimaxEngine::pawn_pusher(depth)),
    }
}

fn run(cli: Cli) -> ChessResult<()> {
    let start = match &cli.fen {
        Some(fen) => parse_fen(fen)?,
        None => Position::start(),
    };

    // Distinct streams when both sides are random.
    let mut white = build_engine(cli.white, cli.depth, cli.seed);
    let mut black = build_engine(cli.black, cli.depth, cli.seed.map(|s| s.wrapping_add(1)));
    info!(white = white.name(), black = black.name(), fen = %generate_fen(&start), "starting match");

    if !cli.quiet {
        println!("{}", render_position(&start));
    }

    let quiet = cli.quiet;
    let result = play_engine_match_observed(
        white.as_mut(),
        black.as_mut(),
        start,
        MatchConfig {
            max_plies: cli.max_plies,
        },
        |mv| {
            if !quiet {
                println!("{}\n{}", mv.chess_move, render_position(&mv.position_after));
            }
        },
    )?;

    println!("{}", result.played_moves_lan.join(" "));
    println!("result: {}", result.outcome);
    println!("final: {}", generate_fen(&result.final_position));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!(%err, "match aborted");
        std::process::exit(1);
    }
}
