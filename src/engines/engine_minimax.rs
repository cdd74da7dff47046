//! Fixed-depth minimax engine parameterized by its board scorer.
//!
//! `MinimaxEngine<MaterialScorer>` plays for material,
//! `MinimaxEngine<PawnPusherScorer>` races its pawns up the board.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, PawnPusherScorer};
use crate::search::minimax::{minimax_search, SearchConfig, SearchStats};
use crate::search::threading::{minimax_search_parallel, ThreadingConfig};

pub struct MinimaxEngine<S: BoardScorer> {
    name: String,
    scorer: S,
    config: SearchConfig,
    threading: Option<ThreadingConfig>,
    stats: SearchStats,
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn new(name: impl Into<String>, scorer: S, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            scorer,
            config,
            threading: None,
            stats: SearchStats::default(),
        }
    }

    /// Search root moves on worker threads.
    pub fn with_threading(mut self, threading: ThreadingConfig) -> Self {
        self.threading = Some(threading);
        self
    }

    /// Totals across every search since the last `new_game`.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl MinimaxEngine<MaterialScorer> {
    pub fn material(depth: u8) -> Self {
        Self::new("material", MaterialScorer, SearchConfig { depth })
    }
}

impl MinimaxEngine<PawnPusherScorer> {
    pub fn pawn_pusher(depth: u8) -> Self {
        Self::new("pawn-pusher", PawnPusherScorer, SearchConfig { depth })
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<EngineOutput> {
        let result = match self.threading {
            Some(threading) => minimax_search_parallel(
                position,
                &LegalMoveGenerator,
                &self.scorer,
                self.config,
                threading,
                &mut self.stats,
            )?,
            None => minimax_search(
                position,
                &LegalMoveGenerator,
                &self.scorer,
                self.config,
                &mut self.stats,
            )?,
        };

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "{} depth {} score {} nodes {}",
            self.name,
            self.config.effective_depth(),
            result.best_score,
            self.stats.nodes
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}
