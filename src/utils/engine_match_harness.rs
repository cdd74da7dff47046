//! Head-to-head engine match harness.
//!
//! Alternates two `Engine` implementations from a starting position until the
//! game is decided or the ply limit runs out.

use tracing::{info, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_status::{classify, GameStatus};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::GeneratedMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Checkmate { winner: Color },
    DrawStalemate,
    DrawInsufficientMaterial,
    DrawRepetition,
    DrawFiftyMoveRule,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Normal => None,
            GameStatus::Checkmate { winner } => Some(MatchOutcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
            GameStatus::InsufficientMaterial => Some(MatchOutcome::DrawInsufficientMaterial),
            GameStatus::Repetition => Some(MatchOutcome::DrawRepetition),
            GameStatus::FiftyMoveRule => Some(MatchOutcome::DrawFiftyMoveRule),
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            MatchOutcome::DrawStalemate => write!(f, "draw by stalemate"),
            MatchOutcome::DrawInsufficientMaterial => write!(f, "draw by insufficient material"),
            MatchOutcome::DrawRepetition => write!(f, "draw by repetition"),
            MatchOutcome::DrawFiftyMoveRule => write!(f, "draw by fifty-move rule"),
            MatchOutcome::DrawMaxPlies => write!(f, "ply limit reached"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub played_moves_lan: Vec<String>,
}

/// Play `engine_white` against `engine_black` from `start`.
pub fn play_engine_match<'a>(
    engine_white: &'a mut dyn Engine,
    engine_black: &'a mut dyn Engine,
    start: Position,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_observed(engine_white, engine_black, start, config, |_| {})
}

/// Same as [`play_engine_match`], calling `on_move` after every ply.
pub fn play_engine_match_observed<'a, F>(
    engine_white: &'a mut dyn Engine,
    engine_black: &'a mut dyn Engine,
    start: Position,
    config: MatchConfig,
    mut on_move: F,
) -> ChessResult<MatchResult>
where
    F: FnMut(&GeneratedMove),
{
    engine_white.new_game();
    engine_black.new_game();

    let mut position = start;
    let mut played_moves_lan = Vec::<String>::new();

    for _ in 0..config.max_plies {
        if let Some(outcome) = MatchOutcome::from_status(classify(&position)?) {
            info!(%outcome, plies = played_moves_lan.len(), "match finished");
            return Ok(MatchResult {
                outcome,
                final_position: position,
                played_moves_lan,
            });
        }

        let mover = position.side_to_move();
        let engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };
        let out = engine.choose_move(&position)?;
        let chosen = out.best_move.ok_or_else(|| {
            ChessError::Engine(format!("{} returned no move in a live position", engine.name()))
        })?;

        if !legal_moves(&position).contains(&chosen) {
            warn!(engine = engine.name(), mv = %chosen.chess_move, "illegal move rejected");
            return Err(ChessError::Engine(format!(
                "{} returned illegal move {}",
                engine.name(),
                chosen.chess_move
            )));
        }

        let lan = chosen.chess_move.to_long_algebraic();
        info!(ply = played_moves_lan.len() + 1, %mover, engine = engine.name(), mv = %lan, "move played");
        on_move(&chosen);
        played_moves_lan.push(lan);
        position = chosen.position_after;
    }

    let outcome = MatchOutcome::from_status(classify(&position)?).unwrap_or(MatchOutcome::DrawMaxPlies);
    info!(%outcome, plies = played_moves_lan.len(), "match finished");
    Ok(MatchResult {
        outcome,
        final_position: position,
        played_moves_lan,
    })
}
