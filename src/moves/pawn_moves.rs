use crate::game_state::chess_rules::pawn_forward;
use crate::game_state::chess_types::{offset_square, Color, Square};

/// Squares a pawn of `color` on `square` captures onto.
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = pawn_forward(color);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_file| offset_square(square, d_file, forward))
}

/// Squares a pawn of `color` would have to stand on to capture `square`,
/// i.e. the two squares diagonally behind it from that colour's view.
#[inline]
pub fn pawn_attack_origins(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let backward = -pawn_forward(color);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_file| offset_square(square, d_file, backward))
}
