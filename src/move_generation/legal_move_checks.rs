//! Square attack queries.
//!
//! `is_square_attacked` answers whether any piece of a colour could capture on
//! a square with its next move. Each piece family is scanned on its own and
//! the results are OR-ed together.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_origins;
use crate::moves::sliding_moves::{ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position.king_square(color)
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let knight = attacked_by_knight(position, square, attacker_color);
    let orthogonal = attacked_along_rays(
        position,
        square,
        attacker_color,
        &ROOK_DIRECTIONS,
        PieceKind::Rook,
    );
    let diagonal = attacked_along_rays(
        position,
        square,
        attacker_color,
        &BISHOP_DIRECTIONS,
        PieceKind::Bishop,
    );
    let pawn = attacked_by_pawn(position, square, attacker_color);
    let king = attacked_by_king(position, square, attacker_color);

    knight || orthogonal || diagonal || pawn || king
}

fn attacked_by_knight(position: &Position, square: Square, attacker_color: Color) -> bool {
    knight_targets(square).any(|from| position.cell(from).is(PieceKind::Knight, attacker_color))
}

/// Walks each ray to its first occupant; a `slider` or queen of the attacking
/// colour there attacks `square`, anything else blocks the ray.
fn attacked_along_rays(
    position: &Position,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        ray(square, direction)
            .map(|target| position.cell(target))
            .find(|cell| !cell.is_empty())
            .is_some_and(|cell| {
                cell.is(slider, attacker_color) || cell.is(PieceKind::Queen, attacker_color)
            })
    })
}

fn attacked_by_pawn(position: &Position, square: Square, attacker_color: Color) -> bool {
    pawn_attack_origins(attacker_color, square)
        .any(|from| position.cell(from).is(PieceKind::Pawn, attacker_color))
}

fn attacked_by_king(position: &Position, square: Square, attacker_color: Color) -> bool {
    king_targets(square).any(|from| position.cell(from).is(PieceKind::King, attacker_color))
}
