//! Ray geometry for rooks, bishops and queens.

use crate::game_state::chess_types::{offset_square, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Squares from `square` outwards in one direction, up to the board edge.
/// Occupancy is not considered; callers stop at the first occupied square.
pub fn ray(square: Square, (d_file, d_row): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(offset_square(square, d_file, d_row), move |&current| {
        offset_square(current, d_file, d_row)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_runs_to_the_board_edge() {
        // g3 towards the eighth rank.
        let g3 = 46u8;
        assert_eq!(ray(g3, (0, -1)).collect::<Vec<_>>(), vec![38, 30, 22, 14, 6]);
        assert_eq!(ray(g3, (1, 0)).collect::<Vec<_>>(), vec![47]);
        assert_eq!(ray(7, (1, 1)).count(), 0);
    }

    #[test]
    fn rook_rays_from_any_square_cover_fourteen_squares() {
        for square in 0..64u8 {
            let total: usize = ROOK_DIRECTIONS
                .iter()
                .map(|&direction| ray(square, direction).count())
                .sum();
            assert_eq!(total, 14, "square {square}");
        }
    }
}
