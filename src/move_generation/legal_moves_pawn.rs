//! Pawn pushes, captures, promotions and en passant.

use crate::game_state::chess_rules::{
    en_passant_capturer_row, en_passant_target_row, pawn_forward, pawn_start_row, promotion_row,
    PROMOTION_PIECES,
};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::moves::pawn_moves::pawn_capture_targets;

pub fn generate_pawn_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move();
    let forward = pawn_forward(side);

    if let Some(one_step) = offset_square(from, 0, forward) {
        if position.is_empty_square(one_step) {
            push_pawn_move(out, side, from, one_step, None, MoveKind::Quiet);

            if square_row(from) == pawn_start_row(side) {
                if let Some(two_step) = offset_square(from, 0, 2 * forward) {
                    if position.is_empty_square(two_step) {
                        out.push(ChessMove {
                            from,
                            to: two_step,
                            piece: PieceKind::Pawn,
                            captured: None,
                            promotion: None,
                            kind: MoveKind::DoublePawnPush,
                        });
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        if let Some(captured) = enemy_piece_on(position, to) {
            push_pawn_move(out, side, from, to, Some(captured), MoveKind::Capture);
        }
    }

    generate_en_passant(position, from, out);
}

/// Emits a single move, or one move per promotion piece on the last row.
fn push_pawn_move(
    out: &mut Vec<ChessMove>,
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    kind: MoveKind,
) {
    let base = ChessMove {
        from,
        to,
        piece: PieceKind::Pawn,
        captured,
        promotion: None,
        kind,
    };

    if square_row(to) == promotion_row(side) {
        out.extend(PROMOTION_PIECES.iter().map(|&promotion| ChessMove {
            promotion: Some(promotion),
            ..base
        }));
    } else {
        out.push(base);
    }
}

fn generate_en_passant(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move();
    let Some(ep_file) = position.en_passant_file() else {
        return;
    };

    if square_row(from) != en_passant_capturer_row(side) {
        return;
    }
    if square_file(from).abs_diff(ep_file) != 1 {
        return;
    }

    let target = square_at(ep_file, en_passant_target_row(side));
    let victim = square_at(ep_file, square_row(from));
    if !position.is_empty_square(target)
        || !position.cell(victim).is(PieceKind::Pawn, side.opposite())
    {
        return;
    }

    out.push(ChessMove {
        from,
        to: target,
        piece: PieceKind::Pawn,
        captured: Some(PieceKind::Pawn),
        promotion: None,
        kind: MoveKind::EnPassant,
    });
}
