//! Game-state classification.
//!
//! Derives whether a position is ongoing, checkmate, stalemate or a dead draw
//! by insufficient material from the position and its legal move count.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// Reserved; repetition is not tracked.
    Repetition,
    /// Reserved; move clocks are not tracked.
    FiftyMoveRule,
}

pub fn classify(position: &Position) -> ChessResult<GameStatus> {
    let side = position.side_to_move();
    if position.king_square(side).is_none() {
        return Err(ChessError::MissingKing(side));
    }

    if legal_moves(position).is_empty() {
        return Ok(if is_king_in_check(position, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        });
    }

    if has_insufficient_material(position) {
        return Ok(GameStatus::InsufficientMaterial);
    }

    Ok(GameStatus::Normal)
}

/// No queens, rooks or pawns anywhere, and at most one minor piece per side.
pub fn has_insufficient_material(position: &Position) -> bool {
    [Color::White, Color::Black].into_iter().all(|color| {
        let mut minors = 0;
        for (_, kind) in position.pieces(color) {
            match kind {
                PieceKind::Queen | PieceKind::Rook | PieceKind::Pawn => return false,
                kind if kind.is_minor() => minors += 1,
                _ => {}
            }
        }
        minors <= 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    fn status(fen: &str) -> GameStatus {
        let position = parse_fen(fen).expect("FEN should parse");
        classify(&position).expect("classification should succeed")
    }

    #[test]
    fn back_rank_mate_against_black() {
        assert_eq!(
            status("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn rook_check_on_the_g_file_leaves_three_escapes() {
        // The pawn covers f7 and the rook covers g7; f8, h8 and h7 stay free.
        let position = parse_fen("6k1/8/4P3/8/8/8/1K4R1/8 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&position, Color::Black));

        let mut escapes: Vec<String> = legal_moves(&position)
            .iter()
            .map(|mv| mv.chess_move.to_long_algebraic())
            .collect();
        escapes.sort();
        assert_eq!(escapes, vec!["g8f8", "g8h7", "g8h8"]);
        assert_eq!(classify(&position).expect("classifies"), GameStatus::Normal);
    }

    #[test]
    fn back_rank_mate_against_white() {
        assert_eq!(
            status("6k1/8/8/8/8/8/5PPP/3r2K1 w - - 0 1"),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        assert_eq!(status("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn minor_piece_endings_are_insufficient() {
        assert_eq!(status("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), GameStatus::InsufficientMaterial);
        assert_eq!(status("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1"), GameStatus::InsufficientMaterial);
        assert_eq!(status("4kn2/8/8/8/8/8/8/2B1K3 w - - 0 1"), GameStatus::InsufficientMaterial);
        assert_eq!(status("4k3/8/8/8/8/8/8/1NB1K3 w - - 0 1"), GameStatus::Normal);
        assert_eq!(status("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"), GameStatus::Normal);
    }

    #[test]
    fn start_position_is_normal() {
        assert_eq!(
            classify(&Position::start()).expect("start position classifies"),
            GameStatus::Normal
        );
    }

    #[test]
    fn missing_king_is_an_error() {
        let position = Position::empty(Color::White).with_piece(46, PieceKind::Rook, Color::White);
        assert!(matches!(
            classify(&position),
            Err(ChessError::MissingKing(Color::White))
        ));
    }
}
