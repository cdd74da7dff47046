use crate::game_state::chess_types::{offset_square, Square};

/// (file, row) offsets a knight jumps by.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `square` reaches.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_DELTAS
        .into_iter()
        .filter_map(move |(d_file, d_row)| offset_square(square, d_file, d_row))
}
