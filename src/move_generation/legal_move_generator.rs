//! Full legal move generation pipeline.
//!
//! Walks every square, dispatches the side to move's pieces to their
//! generators, turns each candidate into its successor position and drops
//! successors that leave the mover's own king attacked.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>> {
        Ok(legal_moves(position))
    }
}

/// Candidate moves obeying piece movement rules, king safety not yet checked.
pub fn pseudo_legal_move_descriptions(position: &Position) -> Vec<ChessMove> {
    let side = position.side_to_move();
    let mut out = Vec::with_capacity(64);

    for (index, cell) in position.squares().iter().enumerate() {
        let Cell::Occupied(kind, color) = *cell else {
            continue;
        };
        if color != side {
            continue;
        }

        let from = index as Square;
        match kind {
            PieceKind::Pawn => generate_pawn_moves(position, from, &mut out),
            PieceKind::Knight => generate_knight_moves(position, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(position, from, &mut out),
            PieceKind::Rook => generate_rook_moves(position, from, &mut out),
            PieceKind::Queen => generate_queen_moves(position, from, &mut out),
            PieceKind::King => generate_king_moves(position, from, &mut out),
        }
    }

    out
}

pub fn pseudo_legal_moves(position: &Position) -> Vec<GeneratedMove> {
    pseudo_legal_move_descriptions(position)
        .into_iter()
        .map(|chess_move| GeneratedMove {
            position_after: make_move(position, &chess_move),
            chess_move,
        })
        .collect()
}

/// Pseudo-legal moves minus those leaving the mover's king attacked.
pub fn legal_moves(position: &Position) -> Vec<GeneratedMove> {
    let mover = position.side_to_move();
    pseudo_legal_moves(position)
        .into_iter()
        .filter(|generated| !is_king_in_check(&generated.position_after, mover))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{legal_moves, pseudo_legal_moves, LegalMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_descriptions::MoveKind;
    use crate::moves::sliding_moves::ray;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn legal_targets(position: &Position) -> Vec<String> {
        let mut out: Vec<String> = legal_moves(position)
            .iter()
            .map(|mv| mv.chess_move.to_long_algebraic())
            .collect();
        out.sort();
        out
    }

    const FIXTURES: [&str; 6] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "4k3/8/8/2PpP3/8/8/8/4K3 w - d6 0 2",
    ];

    #[test]
    fn start_position_has_twenty_moves() {
        let moves = LegalMoveGenerator
            .generate_legal_moves(&Position::start())
            .expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn lone_king_on_h1_has_three_moves() {
        let position = Position::empty(Color::White).with_piece(sq("h1"), PieceKind::King, Color::White);
        assert_eq!(legal_targets(&position), vec!["h1g1", "h1g2", "h1h2"]);
    }

    #[test]
    fn lone_rook_on_g3_covers_its_file_and_rank() {
        let position = Position::empty(Color::White).with_piece(sq("g3"), PieceKind::Rook, Color::White);
        let moves = legal_moves(&position);
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|mv| {
            let to = mv.chess_move.to;
            to != sq("g3") && (square_file(to) == 6 || square_row(to) == square_row(sq("g3")))
        }));
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        for fen in FIXTURES {
            let position = parse_fen(fen).expect("fixture FEN should parse");
            let mover = position.side_to_move();
            for mv in legal_moves(&position) {
                assert!(
                    !is_king_in_check(&mv.position_after, mover),
                    "{fen}: {} leaves king attacked",
                    mv.chess_move
                );
                for reply in legal_moves(&mv.position_after) {
                    assert!(!is_king_in_check(&reply.position_after, mover.opposite()));
                }
            }
        }
    }

    #[test]
    fn pinned_piece_may_not_leave_the_pin_line() {
        // Knight on e2 is pinned by the rook on e8.
        let position = parse_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(legal_moves(&position)
            .iter()
            .all(|mv| mv.chess_move.piece != PieceKind::Knight));
        assert!(pseudo_legal_moves(&position)
            .iter()
            .any(|mv| mv.chess_move.piece == PieceKind::Knight));
    }

    #[test]
    fn in_check_only_evasions_remain() {
        let position = parse_fen("4k3/8/8/8/8/8/3q4/R3K3 w Q - 0 1").expect("FEN should parse");
        assert_eq!(legal_targets(&position), vec!["e1d2", "e1f1"]);
    }

    #[test]
    fn legal_moves_mirror_under_colour_flip() {
        for fen in FIXTURES {
            let position = parse_fen(fen).expect("fixture FEN should parse");
            let flipped = position.color_flipped();

            let expected: HashSet<Position> = legal_moves(&position)
                .into_iter()
                .map(|mv| mv.position_after.color_flipped())
                .collect();
            let actual: HashSet<Position> = legal_moves(&flipped)
                .into_iter()
                .map(|mv| mv.position_after)
                .collect();

            assert_eq!(actual, expected, "{fen}");
        }
    }

    #[test]
    fn sliding_moves_never_jump_pieces() {
        for fen in FIXTURES {
            let position = parse_fen(fen).expect("fixture FEN should parse");
            for mv in pseudo_legal_moves(&position) {
                let chess_move = mv.chess_move;
                if !matches!(
                    chess_move.piece,
                    PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen
                ) {
                    continue;
                }
                let d_file = (square_file(chess_move.to) as i8 - square_file(chess_move.from) as i8)
                    .signum();
                let d_row =
                    (square_row(chess_move.to) as i8 - square_row(chess_move.from) as i8).signum();
                for between in ray(chess_move.from, (d_file, d_row)).take_while(|&s| s != chess_move.to)
                {
                    assert!(position.is_empty_square(between), "{fen}: {chess_move} jumps");
                }
            }
        }
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let start = Position::start();
        let after_e4 = legal_moves(&start)
            .into_iter()
            .find(|mv| mv.chess_move.to_long_algebraic() == "e2e4")
            .expect("e2e4 should be legal");
        assert_eq!(after_e4.position_after.en_passant_file(), Some(4));

        for reply in legal_moves(&after_e4.position_after) {
            let expected = (reply.chess_move.kind == MoveKind::DoublePawnPush)
                .then(|| square_file(reply.chess_move.from));
            assert_eq!(reply.position_after.en_passant_file(), expected);
        }
    }

    #[test]
    fn en_passant_capture_removes_the_pawn_beside_the_mover() {
        let position = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let ep = legal_moves(&position)
            .into_iter()
            .find(|mv| mv.chess_move.kind == MoveKind::EnPassant)
            .expect("en passant should be legal");
        let after = ep.position_after;
        assert!(after.cell(sq("d6")).is(PieceKind::Pawn, Color::White));
        assert!(after.is_empty_square(sq("d5")));
        assert!(after.is_empty_square(sq("e5")));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        // Capturing on d6 would open the fifth rank to the rook on a5.
        let position = parse_fen("4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 2").expect("FEN should parse");
        assert!(legal_moves(&position)
            .iter()
            .all(|mv| mv.chess_move.kind != MoveKind::EnPassant));
    }

    #[test]
    fn castling_moves_king_and_rook_and_clears_rights() {
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = legal_moves(&position)
            .into_iter()
            .find(|mv| mv.chess_move.kind == MoveKind::Castle(CastleWing::Queenside))
            .expect("long castle should be legal");
        let after = castle.position_after;
        assert!(after.cell(sq("c1")).is(PieceKind::King, Color::White));
        assert!(after.cell(sq("d1")).is(PieceKind::Rook, Color::White));
        assert!(after.is_empty_square(sq("a1")));
        assert!(after.is_empty_square(sq("e1")));
        assert!(!after.castling_rights().has(Color::White, CastleWing::Kingside));
        assert!(!after.castling_rights().has(Color::White, CastleWing::Queenside));
        assert!(after.castling_rights().has(Color::Black, CastleWing::Kingside));
    }

    #[test]
    fn every_king_move_forfeits_both_rights() {
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        for mv in legal_moves(&position) {
            if mv.chess_move.piece == PieceKind::King {
                let rights = mv.position_after.castling_rights();
                assert!(!rights.has(Color::White, CastleWing::Kingside));
                assert!(!rights.has(Color::White, CastleWing::Queenside));
            }
        }
    }
}
