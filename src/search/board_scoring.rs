//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! [`BoardScorer`]. Scores are always from White's point of view; the search
//! flips the sign for a Black root mover.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub trait BoardScorer: Send + Sync {
    /// Higher is better for White.
    fn score(&self, position: &Position) -> i32;
}

impl<F> BoardScorer for F
where
    F: Fn(&Position) -> i32 + Send + Sync,
{
    fn score(&self, position: &Position) -> i32 {
        self(position)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 9001,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        position
            .squares()
            .iter()
            .map(|cell| match *cell {
                Cell::Occupied(kind, Color::White) => Self::piece_value(kind),
                Cell::Occupied(kind, Color::Black) => -Self::piece_value(kind),
                Cell::Empty => 0,
            })
            .sum()
    }
}

/// Rewards pawns for how far they have travelled from their start row, plus
/// a flat bonus per queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnPusherScorer;

impl PawnPusherScorer {
    pub const QUEEN_BONUS: i32 = 9;
}

impl BoardScorer for PawnPusherScorer {
    fn score(&self, position: &Position) -> i32 {
        let mut total = 0i32;
        for (index, cell) in position.squares().iter().enumerate() {
            let row = square_row(index as Square) as i32;
            match *cell {
                Cell::Occupied(PieceKind::Pawn, Color::White) => total += 6 - row,
                Cell::Occupied(PieceKind::Pawn, Color::Black) => total -= row - 1,
                Cell::Occupied(PieceKind::Queen, Color::White) => total += Self::QUEEN_BONUS,
                Cell::Occupied(PieceKind::Queen, Color::Black) => total -= Self::QUEEN_BONUS,
                _ => {}
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn material_is_balanced_at_the_start() {
        assert_eq!(MaterialScorer.score(&Position::start()), 0);
    }

    #[test]
    fn material_counts_from_whites_point_of_view() {
        // White is up a rook; it does not matter whose turn it is.
        let white = parse_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let black = parse_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&white), 5);
        assert_eq!(MaterialScorer.score(&black), 5);

        let down_a_queen = parse_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&down_a_queen), -9);
    }

    #[test]
    fn pawn_pusher_is_zero_at_the_start() {
        assert_eq!(PawnPusherScorer.score(&Position::start()), 0);
    }

    #[test]
    fn pawn_pusher_rewards_advanced_pawns() {
        // e4 has advanced two rows, the black queen costs nine.
        let position = parse_fen("3qk3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(PawnPusherScorer.score(&position), 2 - 9);

        let black_pawn = parse_fen("4k3/8/8/8/8/3p4/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(PawnPusherScorer.score(&black_pawn), -4);
    }

    #[test]
    fn closures_are_scorers() {
        let knights = |position: &Position| {
            position
                .pieces(Color::White)
                .filter(|&(_, kind)| kind == PieceKind::Knight)
                .count() as i32
        };
        assert_eq!(knights.score(&Position::start()), 2);
    }
}
