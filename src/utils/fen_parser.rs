//! FEN-to-Position parser.
//!
//! Builds a validated `Position` from a Forsyth-Edwards Notation string. The
//! halfmove clock and fullmove number are optional and ignored since no draw
//! rule consumes them.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::en_passant_target_row;
use crate::game_state::chess_types::*;
use crate::game_state::position::{Position, PositionParts};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid move counter: {counter}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    Position::from_parts(PositionParts {
        squares: parse_board(board_part)?,
        side_to_move,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_file: parse_en_passant_file(en_passant_part, side_to_move)?,
    })
}

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(message.into())
}

fn parse_board(board_part: &str) -> ChessResult<[Cell; 64]> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut squares = [Cell::Empty; 64];

    // FEN lists the eighth rank first, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut file = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            squares[row * 8 + file] = Cell::Occupied(piece, color);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target must sit behind a pawn the opponent just double-pushed.
fn parse_en_passant_file(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<u8>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    if square_row(square) != en_passant_target_row(side_to_move) {
        return Err(invalid(format!(
            "en-passant square {en_passant_part} is not capturable by {side_to_move}"
        )));
    }

    Ok(Some(square_file(square)))
}

pub fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
