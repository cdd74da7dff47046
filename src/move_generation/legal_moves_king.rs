//! King steps and castling.

use crate::game_state::chess_rules::castle_path;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

pub fn generate_king_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    generate_step_moves(position, from, PieceKind::King, king_targets(from), out);
    generate_castling_moves(position, from, out);
}

fn generate_castling_moves(position: &Position, king_from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move();
    let enemy = side.opposite();
    let rights = position.castling_rights();

    if !rights.has(side, CastleWing::Kingside) && !rights.has(side, CastleWing::Queenside) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(position, king_from, enemy) {
        return;
    }

    for wing in [CastleWing::Kingside, CastleWing::Queenside] {
        if !rights.has(side, wing) {
            continue;
        }

        let path = castle_path(side, wing);
        let row = square_row(path.king_from);

        if king_from != path.king_from || !position.cell(path.rook_from).is(PieceKind::Rook, side)
        {
            continue;
        }

        let between_empty = path
            .between
            .iter()
            .all(|&file| position.is_empty_square(square_at(file, row)));
        if !between_empty {
            continue;
        }

        // Checked against the board before the king moves.
        let path_safe = path
            .king_path
            .iter()
            .all(|&file| !is_square_attacked(position, square_at(file, row), enemy));
        if !path_safe {
            continue;
        }

        out.push(ChessMove {
            from: path.king_from,
            to: path.king_to,
            piece: PieceKind::King,
            captured: None,
            promotion: None,
            kind: MoveKind::Castle(wing),
        });
    }
}
