//! Position transitions.
//!
//! `make_move` turns a generated move into its successor position. It trusts
//! its input and is only fed by the generators. `apply_move` is the public
//! entry point for moves built elsewhere and checks the preconditions first.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castle_path, castling_right_for_corner};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// Apply a move that did not come from the generator.
///
/// The origin must hold `chess_move.piece` for the side to move and the
/// destination must not hold one of the mover's own pieces. King safety is
/// not checked here; use the legal move list for that.
pub fn apply_move(position: &Position, chess_move: &ChessMove) -> ChessResult<Position> {
    let mover = position.side_to_move();

    for square in [chess_move.from, chess_move.to] {
        if usize::from(square) >= 64 {
            return Err(ChessError::OffBoard(square));
        }
    }

    match position.cell(chess_move.from) {
        Cell::Empty => return Err(ChessError::EmptyOrigin(chess_move.from)),
        Cell::Occupied(_, color) if color != mover => {
            return Err(ChessError::WrongSideToMove(chess_move.from))
        }
        Cell::Occupied(kind, _) if kind != chess_move.piece => {
            return Err(ChessError::PieceMismatch {
                square: chess_move.from,
                expected: chess_move.piece,
                found: kind,
            })
        }
        Cell::Occupied(..) => {}
    }

    if position.color_on(chess_move.to) == Some(mover) {
        return Err(ChessError::CaptureOwnPiece(chess_move.to));
    }

    Ok(make_move(position, chess_move))
}

pub(crate) fn make_move(position: &Position, chess_move: &ChessMove) -> Position {
    let mover = position.side_to_move();
    let mut next = position.clone();

    next.squares[chess_move.from as usize] = Cell::Empty;
    let placed = chess_move.promotion.unwrap_or(chess_move.piece);
    next.squares[chess_move.to as usize] = Cell::Occupied(placed, mover);

    match chess_move.kind {
        MoveKind::EnPassant => {
            // The captured pawn sits beside the mover, on the origin row.
            let captured = square_at(square_file(chess_move.to), square_row(chess_move.from));
            next.squares[captured as usize] = Cell::Empty;
        }
        MoveKind::Castle(wing) => {
            let path = castle_path(mover, wing);
            next.squares[path.rook_from as usize] = Cell::Empty;
            next.squares[path.rook_to as usize] = Cell::Occupied(PieceKind::Rook, mover);
        }
        MoveKind::Quiet | MoveKind::Capture | MoveKind::DoublePawnPush => {}
    }

    update_castling_rights(&mut next.castling_rights, mover, chess_move);

    next.en_passant_file = match chess_move.kind {
        MoveKind::DoublePawnPush => Some(square_file(chess_move.from)),
        _ => None,
    };
    next.side_to_move = mover.opposite();

    next
}

fn update_castling_rights(rights: &mut CastlingRights, mover: Color, chess_move: &ChessMove) {
    if chess_move.piece == PieceKind::King {
        rights.clear_side(mover);
    }

    // Leaving or landing on a rook corner (moving or capturing that rook).
    for square in [chess_move.from, chess_move.to] {
        if let Some((color, wing)) = castling_right_for_corner(square) {
            rights.clear(color, wing);
        }
    }
}
