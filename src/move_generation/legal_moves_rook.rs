//! Rook move generation.
//!
//! Castling-right invalidation for rooks leaving their corner happens in the
//! position transition, which sees both origin and destination.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::sliding_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    generate_slider_moves(position, from, PieceKind::Rook, &ROOK_DIRECTIONS, out);
}
