use crate::game_state::chess_rules::en_passant_target_row;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

/// FEN for `position`. Move counters are not tracked and always read `0 1`.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights());
    let en_passant = generate_en_passant_field(position);

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.cell(square_at(file, row)) {
                Cell::Occupied(piece, color) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(color, piece));
                }
                Cell::Empty => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    let base = match piece {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (rights.white_kingside, 'K'),
        (rights.white_queenside, 'Q'),
        (rights.black_kingside, 'k'),
        (rights.black_queenside, 'q'),
    ]
    .into_iter()
    .filter_map(|(set, ch)| set.then_some(ch))
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

fn generate_en_passant_field(position: &Position) -> String {
    match position.en_passant_file() {
        Some(file) => square_to_algebraic(square_at(
            file,
            en_passant_target_row(position.side_to_move()),
        )),
        None => "-".to_owned(),
    }
}
