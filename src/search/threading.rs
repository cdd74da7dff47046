//! Root-parallel minimax.
//!
//! Subtrees below distinct root moves share no mutable state, so the root
//! move list is split across scoped worker threads and the per-move values
//! are merged back in generation order. The chosen move is therefore the same
//! one [`minimax_search`](crate::search::minimax::minimax_search) returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use chrono::Utc;
use tracing::debug;

use crate::game_state::position::Position;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{
    minimax_value, terminal_value, SearchConfig, SearchResult, SearchStats,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingConfig {
    pub requested_threads: usize,
}

impl Default for ThreadingConfig {
    fn default() -> Self {
        Self {
            requested_threads: thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl ThreadingConfig {
    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.requested_threads.max(1)
    }
}

pub fn minimax_search_parallel<G: MoveGenerator, S: BoardScorer + ?Sized>(
    position: &Position,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    threading: ThreadingConfig,
    stats: &mut SearchStats,
) -> MoveGenResult<SearchResult> {
    let started = Utc::now();
    let depth = config.effective_depth();
    let root_color = position.side_to_move();
    let nodes = AtomicU64::new(1);

    let root_moves = generator.generate_legal_moves(position)?;
    if root_moves.is_empty() {
        stats.searches += 1;
        stats.nodes += 1;
        stats.elapsed = stats.elapsed + (Utc::now() - started);
        return Ok(SearchResult {
            best_move: None,
            best_score: terminal_value(position, true, 0),
        });
    }

    let workers = threading.normalized_threads().min(root_moves.len());
    let chunk_len = root_moves.len().div_ceil(workers);

    let scores: Vec<i32> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .chunks(chunk_len)
            .map(|chunk| {
                let nodes = &nodes;
                scope.spawn(move || {
                    let mut local_nodes = 0u64;
                    let scores = chunk
                        .iter()
                        .map(|mv| {
                            minimax_value(
                                &mv.position_after,
                                generator,
                                scorer,
                                depth - 1,
                                false,
                                root_color,
                                1,
                                &mut local_nodes,
                            )
                        })
                        .collect::<MoveGenResult<Vec<i32>>>();
                    nodes.fetch_add(local_nodes, Ordering::Relaxed);
                    scores
                })
            })
            .collect();

        let mut scores = Vec::with_capacity(root_moves.len());
        for handle in handles {
            let chunk_scores = handle.join().map_err(|_| {
                MoveGenerationError::InvalidState("search worker thread panicked".to_owned())
            })??;
            scores.extend(chunk_scores);
        }
        Ok::<_, MoveGenerationError>(scores)
    })?;

    let mut best_index = 0;
    for (index, &score) in scores.iter().enumerate() {
        if score > scores[best_index] {
            best_index = index;
        }
    }
    let best_score = scores[best_index];
    let best_move = root_moves.into_iter().nth(best_index);

    let nodes = nodes.load(Ordering::Relaxed);
    let elapsed = Utc::now() - started;
    stats.searches += 1;
    stats.nodes += nodes;
    stats.elapsed = stats.elapsed + elapsed;

    debug!(
        depth,
        workers,
        nodes,
        elapsed_ms = elapsed.num_milliseconds(),
        best = ?best_move.as_ref().map(|mv| mv.chess_move.to_long_algebraic()),
        score = best_score,
        "parallel minimax search finished"
    );

    Ok(SearchResult {
        best_move,
        best_score,
    })
}
