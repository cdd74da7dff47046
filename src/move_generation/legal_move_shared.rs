//! Emission helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::moves::sliding_moves::ray;

#[inline]
pub fn enemy_piece_on(position: &Position, square: Square) -> Option<PieceKind> {
    match position.cell(square) {
        Cell::Occupied(kind, color) if color != position.side_to_move() => Some(kind),
        _ => None,
    }
}

/// Quiet move onto an empty square or capture onto an enemy piece; the caller
/// has already ruled out own pieces on `to`.
#[inline]
pub fn quiet_or_capture(
    position: &Position,
    from: Square,
    to: Square,
    piece: PieceKind,
) -> ChessMove {
    let captured = enemy_piece_on(position, to);
    ChessMove {
        from,
        to,
        piece,
        captured,
        promotion: None,
        kind: if captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        },
    }
}

/// Knight/king style generation: every target not holding an own piece.
pub fn generate_step_moves(
    position: &Position,
    from: Square,
    piece: PieceKind,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<ChessMove>,
) {
    let side = position.side_to_move();
    for to in targets {
        if position.color_on(to) == Some(side) {
            continue;
        }
        out.push(quiet_or_capture(position, from, to, piece));
    }
}

/// Rook/bishop/queen generation: walk each ray until the edge or the first
/// piece, capturing it when it is an enemy.
pub fn generate_slider_moves(
    position: &Position,
    from: Square,
    piece: PieceKind,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let side = position.side_to_move();
    for &direction in directions {
        for to in ray(from, direction) {
            match position.color_on(to) {
                None => out.push(quiet_or_capture(position, from, to, piece)),
                Some(color) if color == side => break,
                Some(_) => {
                    out.push(quiet_or_capture(position, from, to, piece));
                    break;
                }
            }
        }
    }
}
