use crate::errors::{ChessError, ChessResult};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::GeneratedMove;
use crate::utils::algebraic::algebraic_to_square;

/// Resolve text such as `e2e4` or `a7a8q` against the legal moves of
/// `position`.
pub fn parse_long_algebraic(position: &Position, long_algebraic: &str) -> ChessResult<GeneratedMove> {
    let text = long_algebraic.trim().to_ascii_lowercase();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(ChessError::UnknownMove(long_algebraic.to_owned()));
    }

    // Validate the coordinates first so typos report as bad squares.
    algebraic_to_square(&text[0..2])?;
    algebraic_to_square(&text[2..4])?;

    legal_moves(position)
        .into_iter()
        .find(|mv| mv.chess_move.to_long_algebraic() == text)
        .ok_or_else(|| ChessError::UnknownMove(long_algebraic.to_owned()))
}
