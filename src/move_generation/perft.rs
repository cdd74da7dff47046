//! Perft node counting for move generator regression checks.

use std::thread;

use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Same counts as [`perft`], one scoped thread per root move.
pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return perft(generator, position, depth);
    }

    let root_moves = generator.generate_legal_moves(position)?;

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generator, mv, depth, 1, &mut local).map(|()| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle.join().map_err(|_| {
                MoveGenerationError::InvalidState("perft worker thread panicked".to_owned())
            })??;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        let chess_move = &mv.chess_move;
        if chess_move.is_capture() {
            counts.captures += 1;
        }
        if chess_move.kind == MoveKind::EnPassant {
            counts.en_passant += 1;
        }
        if chess_move.is_castle() {
            counts.castles += 1;
        }
        if chess_move.promotion.is_some() {
            counts.promotions += 1;
        }

        let after = &mv.position_after;
        if is_king_in_check(after, after.side_to_move()) {
            counts.checks += 1;
            if generator.generate_legal_moves(after)?.is_empty() {
                counts.checkmates += 1;
            }
        }

        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.position_after)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::NullMoveGenerator;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&LegalMoveGenerator, &Position::start(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let start = Position::start();
        let expected = [(1u8, 20usize), (2, 400), (3, 8902)];
        for (depth, nodes) in expected {
            let counts = perft(&LegalMoveGenerator, &start, depth).expect("perft should run");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }

        let depth_three = perft(&LegalMoveGenerator, &start, 3).expect("perft should run");
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let position = parse_fen(KIWIPETE).expect("FEN should parse");

        let depth_one = perft(&LegalMoveGenerator, &position, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&LegalMoveGenerator, &position, 2).expect("perft should run");
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn endgame_position_counts() {
        let position = parse_fen(POSITION_3).expect("FEN should parse");
        for (depth, nodes) in [(1u8, 14usize), (2, 191)] {
            let counts = perft(&LegalMoveGenerator, &position, depth).expect("perft should run");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }

        let counts = perft(&LegalMoveGenerator, &position, 3).expect("perft should run");
        assert_eq!(counts.nodes, 2812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn multi_threaded_perft_matches_single_threaded() {
        let position = parse_fen(KIWIPETE).expect("FEN should parse");
        let single = perft(&LegalMoveGenerator, &position, 2).expect("perft should run");
        let multi =
            perft_multi_threaded(&LegalMoveGenerator, &position, 2).expect("perft should run");
        assert_eq!(single, multi);
    }

    #[test]
    fn generator_errors_propagate() {
        let err = perft(&NullMoveGenerator, &Position::start(), 1)
            .expect_err("null move generator should error");
        assert_eq!(err, MoveGenerationError::NotImplemented);
    }
}
