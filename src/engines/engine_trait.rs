//! Engine abstraction used by the match harness and the binary.
//!
//! Every player, random or searching, picks one successor per call behind the
//! same trait so matches can pair any two of them.

use crate::errors::ChessResult;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::GeneratedMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<GeneratedMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, position: &Position) -> ChessResult<EngineOutput>;
}
