use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    generate_slider_moves(position, from, PieceKind::Queen, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::position::Position;

    #[test]
    fn queen_in_the_corner_has_twenty_one_moves() {
        let position = Position::empty(Color::Black).with_piece(0, PieceKind::Queen, Color::Black);
        let mut out = Vec::new();
        generate_queen_moves(&position, 0, &mut out);
        assert_eq!(out.len(), 21);
    }
}
