use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    generate_step_moves(position, from, PieceKind::Knight, knight_targets(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::position::Position;

    #[test]
    fn knight_skips_own_pieces_and_captures_enemies() {
        // Knight b1 with own pawn d2 and enemy pawn a3.
        let position = Position::empty(Color::White)
            .with_piece(57, PieceKind::Knight, Color::White)
            .with_piece(51, PieceKind::Pawn, Color::White)
            .with_piece(40, PieceKind::Pawn, Color::Black);
        let mut out = Vec::new();
        generate_knight_moves(&position, 57, &mut out);

        let mut targets: Vec<_> = out.iter().map(|mv| mv.to).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![40, 42]);
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 1);
    }
}
