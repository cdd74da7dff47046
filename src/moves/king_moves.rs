use crate::game_state::chess_types::{offset_square, Square};

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_DELTAS
        .into_iter()
        .filter_map(move |(d_file, d_row)| offset_square(square, d_file, d_row))
}
