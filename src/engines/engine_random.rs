//! Random-move engine.
//!
//! Selects uniformly from the legal moves; used for diagnostics, tests and as
//! the weakest opponent in matches.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(position)?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| ChessError::Engine("failed to choose a random move".to_owned()))?;

        out.best_move = Some(picked.clone());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn picks_a_legal_move() {
        let position = Position::start();
        let legal = legal_moves(&position);
        let mut engine = RandomEngine::with_seed(7);
        for _ in 0..10 {
            let out = engine.choose_move(&position).expect("engine should succeed");
            let picked = out.best_move.expect("start position has moves");
            assert!(legal.contains(&picked));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let position = Position::start();
        let mut a = RandomEngine::with_seed(42);
        let mut b = RandomEngine::with_seed(42);
        for _ in 0..5 {
            let left = a.choose_move(&position).expect("engine should succeed");
            let right = b.choose_move(&position).expect("engine should succeed");
            assert_eq!(left.best_move, right.best_move);
        }
    }

    #[test]
    fn no_move_when_mated() {
        let position = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::with_seed(1)
            .choose_move(&position)
            .expect("engine should succeed");
        assert!(out.best_move.is_none());
    }
}
