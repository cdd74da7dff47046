//! Canonical chess-rule constants.
//!
//! Starting position, pawn geometry and castling geometry. Row numbers follow
//! the board indexing in `chess_types` (row 0 is the eighth rank).

use crate::game_state::chess_types::{square_at, CastleWing, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pieces a pawn may promote to, in emission order.
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Row delta of a single pawn step.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Row of the square an enemy pawn skipped over with its double push, i.e.
/// where a pawn of `color` lands when capturing en passant.
#[inline]
pub const fn en_passant_target_row(color: Color) -> u8 {
    let enemy = color.opposite();
    (pawn_start_row(enemy) as i8 + pawn_forward(enemy)) as u8
}

/// Row a pawn of `color` must stand on to capture en passant: the landing row
/// of the enemy double push.
#[inline]
pub const fn en_passant_capturer_row(color: Color) -> u8 {
    let enemy = color.opposite();
    (pawn_start_row(enemy) as i8 + 2 * pawn_forward(enemy)) as u8
}

#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Files strictly between king and rook.
    pub between: &'static [u8],
    /// Files the king crosses and lands on; none may be attacked.
    pub king_path: &'static [u8],
}

pub const fn castle_path(color: Color, wing: CastleWing) -> CastlePath {
    let row = home_row(color);
    match wing {
        CastleWing::Kingside => CastlePath {
            king_from: square_at(4, row),
            king_to: square_at(6, row),
            rook_from: square_at(7, row),
            rook_to: square_at(5, row),
            between: &[5, 6],
            king_path: &[5, 6],
        },
        CastleWing::Queenside => CastlePath {
            king_from: square_at(4, row),
            king_to: square_at(2, row),
            rook_from: square_at(0, row),
            rook_to: square_at(3, row),
            between: &[1, 2, 3],
            king_path: &[3, 2],
        },
    }
}

/// The castling right tied to a rook corner, if `square` is one.
pub fn castling_right_for_corner(square: Square) -> Option<(Color, CastleWing)> {
    [Color::White, Color::Black]
        .into_iter()
        .flat_map(|color| {
            [CastleWing::Kingside, CastleWing::Queenside]
                .into_iter()
                .map(move |wing| (color, wing))
        })
        .find(|&(color, wing)| castle_path(color, wing).rook_from == square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_passant_rows_are_derived_from_the_enemy_double_push() {
        // White captures from the fifth rank onto the sixth.
        assert_eq!(en_passant_capturer_row(Color::White), 3);
        assert_eq!(en_passant_target_row(Color::White), 2);
        // Black captures from the fourth rank onto the third.
        assert_eq!(en_passant_capturer_row(Color::Black), 4);
        assert_eq!(en_passant_target_row(Color::Black), 5);
    }

    #[test]
    fn castle_paths_use_standard_squares() {
        let white_short = castle_path(Color::White, CastleWing::Kingside);
        assert_eq!((white_short.king_from, white_short.king_to), (60, 62));
        assert_eq!((white_short.rook_from, white_short.rook_to), (63, 61));

        let black_long = castle_path(Color::Black, CastleWing::Queenside);
        assert_eq!((black_long.king_from, black_long.king_to), (4, 2));
        assert_eq!((black_long.rook_from, black_long.rook_to), (0, 3));
    }

    #[test]
    fn corners_map_to_their_castling_right() {
        assert_eq!(
            castling_right_for_corner(56),
            Some((Color::White, CastleWing::Queenside))
        );
        assert_eq!(
            castling_right_for_corner(7),
            Some((Color::Black, CastleWing::Kingside))
        );
        assert_eq!(castling_right_for_corner(60), None);
    }
}
