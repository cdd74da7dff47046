//! Immutable board snapshot.
//!
//! `Position` holds piece placement, side to move, castling rights and the
//! en-passant file. Callers never mutate one: every move produces a fresh
//! successor value, so search branches own independent positions.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{home_row, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_position;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The plain fields of a position, as exchanged with external formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionParts {
    pub squares: [Cell; 64],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_file: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) squares: [Cell; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_file: Option<u8>,
}

impl Position {
    /// Build a position from external data, rejecting boards that do not have
    /// exactly one king per colour or carry an out-of-range en-passant file.
    pub fn from_parts(parts: PositionParts) -> ChessResult<Self> {
        for color in [Color::White, Color::Black] {
            let count = parts
                .squares
                .iter()
                .filter(|cell| cell.is(PieceKind::King, color))
                .count();
            match count {
                0 => return Err(ChessError::MissingKing(color)),
                1 => {}
                _ => return Err(ChessError::MultipleKings { color, count }),
            }
        }

        if let Some(file) = parts.en_passant_file {
            if file > 7 {
                return Err(ChessError::InvalidEnPassantFile(file));
            }
        }

        Ok(Self {
            squares: parts.squares,
            side_to_move: parts.side_to_move,
            castling_rights: parts.castling_rights,
            en_passant_file: parts.en_passant_file,
        })
    }

    pub fn to_parts(&self) -> PositionParts {
        PositionParts {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_file: self.en_passant_file,
        }
    }

    /// Standard initial position.
    pub fn start() -> Self {
        let mut position = Self::empty(Color::White);
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                position.squares[square_at(file as u8, home_row(color)) as usize] =
                    Cell::Occupied(*kind, color);
                position.squares[square_at(file as u8, pawn_start_row(color)) as usize] =
                    Cell::Occupied(PieceKind::Pawn, color);
            }
        }
        position.castling_rights = CastlingRights::ALL;
        position
    }

    /// Empty setup board. Boards built this way are not king-validated.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            squares: [Cell::Empty; 64],
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant_file: None,
        }
    }

    /// Setup helper: the same board with `square` holding a piece.
    pub fn with_piece(mut self, square: Square, kind: PieceKind, color: Color) -> Self {
        self.squares[square as usize] = Cell::Occupied(kind, color);
        self
    }

    #[inline]
    pub fn squares(&self) -> &[Cell; 64] {
        &self.squares
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.squares[square as usize]
    }

    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.cell(square).color()
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.cell(square).is_empty()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares
            .iter()
            .position(|cell| cell.is(PieceKind::King, color))
            .map(|index| index as Square)
    }

    /// Occupied squares of `color` in board order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| match *cell {
                Cell::Occupied(kind, c) if c == color => Some((index as Square, kind)),
                _ => None,
            })
    }

    /// Colour-and-orientation mirror: rows reversed, colours swapped.
    pub fn color_flipped(&self) -> Self {
        let mut squares = [Cell::Empty; 64];
        for (index, cell) in self.squares.iter().enumerate() {
            let square = index as Square;
            let mirrored = square_at(square_file(square), 7 - square_row(square));
            squares[mirrored as usize] = match *cell {
                Cell::Empty => Cell::Empty,
                Cell::Occupied(kind, color) => Cell::Occupied(kind, color.opposite()),
            };
        }

        Self {
            squares,
            side_to_move: self.side_to_move.opposite(),
            castling_rights: self.castling_rights.swapped(),
            en_passant_file: self.en_passant_file,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl TryFrom<PositionParts> for Position {
    type Error = ChessError;

    fn try_from(parts: PositionParts) -> ChessResult<Self> {
        Self::from_parts(parts)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}
