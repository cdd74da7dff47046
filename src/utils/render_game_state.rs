//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the match
//! binary. Row 0 (the eighth rank) is printed first.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            match position.cell(square_at(file, row)) {
                Cell::Occupied(piece, color) => out.push(piece_to_unicode(color, piece)),
                Cell::Empty => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(match position.side_to_move() {
        Color::White => "white to move",
        Color::Black => "black to move",
    });

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
