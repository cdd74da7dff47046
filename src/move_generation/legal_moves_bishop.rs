use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::sliding_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    generate_slider_moves(position, from, PieceKind::Bishop, &BISHOP_DIRECTIONS, out);
}
