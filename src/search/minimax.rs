//! Fixed-depth minimax search without pruning.
//!
//! Every legal line is expanded to the requested depth. Leaf scores come from
//! a [`BoardScorer`] (White's point of view) and are flipped when Black is the
//! root mover, so the root always maximizes for the side to move.

use chrono::{TimeDelta, Utc};
use tracing::debug;

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::search::board_scoring::BoardScorer;

/// Mate sentinel; a mate found `ply` plies deep scores `MATE_SCORE - ply`.
pub const MATE_SCORE: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl SearchConfig {
    /// Depth actually searched; zero is raised to one so a move gets picked.
    #[inline]
    pub fn effective_depth(self) -> u8 {
        self.depth.max(1)
    }
}

/// Caller-owned counters; repeated searches accumulate into the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub searches: u64,
    pub nodes: u64,
    pub elapsed: TimeDelta,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            searches: 0,
            nodes: 0,
            elapsed: TimeDelta::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the root has no legal moves.
    pub best_move: Option<GeneratedMove>,
    /// From the root mover's point of view.
    pub best_score: i32,
}

pub fn minimax_search<G: MoveGenerator, S: BoardScorer + ?Sized>(
    position: &Position,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    stats: &mut SearchStats,
) -> MoveGenResult<SearchResult> {
    let started = Utc::now();
    let depth = config.effective_depth();
    let root_color = position.side_to_move();
    let mut nodes = 1u64;

    let root_moves = generator.generate_legal_moves(position)?;
    let result = if root_moves.is_empty() {
        SearchResult {
            best_move: None,
            best_score: terminal_value(position, true, 0),
        }
    } else {
        let mut best: Option<(GeneratedMove, i32)> = None;
        for mv in root_moves {
            let score = minimax_value(
                &mv.position_after,
                generator,
                scorer,
                depth - 1,
                false,
                root_color,
                1,
                &mut nodes,
            )?;
            // Strict comparison keeps the earliest move on ties.
            if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
                best = Some((mv, score));
            }
        }
        let (best_move, best_score) = match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, 0),
        };
        SearchResult {
            best_move,
            best_score,
        }
    };

    let elapsed = Utc::now() - started;
    stats.searches += 1;
    stats.nodes += nodes;
    stats.elapsed = stats.elapsed + elapsed;

    debug!(
        depth,
        nodes,
        elapsed_ms = elapsed.num_milliseconds(),
        best = ?result.best_move.as_ref().map(|mv| mv.chess_move.to_long_algebraic()),
        score = result.best_score,
        "minimax search finished"
    );

    Ok(result)
}

/// Successor position chosen by a depth-`depth` search with the legal move
/// generator, or `None` if the side to move has no legal moves.
pub fn choose_move<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    scorer: &S,
) -> MoveGenResult<Option<Position>> {
    let mut stats = SearchStats::default();
    let result = minimax_search(
        position,
        &LegalMoveGenerator,
        scorer,
        SearchConfig { depth },
        &mut stats,
    )?;
    Ok(result.best_move.map(|mv| mv.position_after))
}

/// Minimax value of `position` for the root mover. `maximizing` is true when
/// the root mover is also the side to move in `position`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn minimax_value<G: MoveGenerator, S: BoardScorer + ?Sized>(
    position: &Position,
    generator: &G,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    root_color: Color,
    ply: u8,
    nodes: &mut u64,
) -> MoveGenResult<i32> {
    *nodes += 1;

    if depth == 0 {
        return Ok(oriented_score(scorer.score(position), root_color));
    }

    let moves = generator.generate_legal_moves(position)?;
    if moves.is_empty() {
        return Ok(terminal_value(position, maximizing, ply));
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let value = minimax_value(
            &mv.position_after,
            generator,
            scorer,
            depth - 1,
            !maximizing,
            root_color,
            ply.saturating_add(1),
            nodes,
        )?;
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    Ok(best)
}

#[inline]
pub(crate) fn oriented_score(white_score: i32, root_color: Color) -> i32 {
    match root_color {
        Color::White => white_score,
        Color::Black => white_score.saturating_neg(),
    }
}

/// Value of a node without legal moves: mated side to move or stalemate.
pub(crate) fn terminal_value(position: &Position, maximizing: bool, ply: u8) -> i32 {
    if !is_king_in_check(position, position.side_to_move()) {
        return 0;
    }
    let mate = MATE_SCORE - i32::from(ply);
    if maximizing {
        -mate
    } else {
        mate
    }
}
