//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices, where `a8 == 0` and `h1 == 63`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{square_at, square_file, square_row, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok(square_at(file - b'a', b'8' - rank))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'8' - square_row(square));
    format!("{file_char}{rank_char}")
}
