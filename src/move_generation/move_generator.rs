use thiserror::Error;

use crate::game_state::position::Position;
use crate::moves::move_descriptions::ChessMove;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenerationError {
    #[error("move generation is not implemented")]
    NotImplemented,
    #[error("invalid position: {0}")]
    InvalidState(String),
}

/// One legal (or pseudo-legal) transition and the position it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub position_after: Position,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>>;
}

/// Generator that always fails; exercises error propagation in callers.
pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _position: &Position) -> MoveGenResult<Vec<GeneratedMove>> {
        Err(MoveGenerationError::NotImplemented)
    }
}
