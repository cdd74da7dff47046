//! Primitive chess types shared by every subsystem.
//!
//! Squares are plain indices: `file = square % 8` and `row = square / 8`,
//! where row 0 is the eighth rank (the top printed row). So `a8 == 0`,
//! `h8 == 7`, `a1 == 56` and `h1 == 63`.

use std::fmt;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Knights and bishops.
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceKind, Color),
}

impl Cell {
    /// Colour of the occupant, `None` for an empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(_, color) => Some(color),
        }
    }

    #[inline]
    pub const fn piece(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind, _) => Some(kind),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Cell::Occupied(kind, color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    Kingside,
    Queenside,
}

/// Four independent castling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    #[inline]
    pub const fn has(self, color: Color, wing: CastleWing) -> bool {
        match (color, wing) {
            (Color::White, CastleWing::Kingside) => self.white_kingside,
            (Color::White, CastleWing::Queenside) => self.white_queenside,
            (Color::Black, CastleWing::Kingside) => self.black_kingside,
            (Color::Black, CastleWing::Queenside) => self.black_queenside,
        }
    }

    #[inline]
    pub fn clear(&mut self, color: Color, wing: CastleWing) {
        match (color, wing) {
            (Color::White, CastleWing::Kingside) => self.white_kingside = false,
            (Color::White, CastleWing::Queenside) => self.white_queenside = false,
            (Color::Black, CastleWing::Kingside) => self.black_kingside = false,
            (Color::Black, CastleWing::Queenside) => self.black_queenside = false,
        }
    }

    #[inline]
    pub fn clear_side(&mut self, color: Color) {
        self.clear(color, CastleWing::Kingside);
        self.clear(color, CastleWing::Queenside);
    }

    /// Same rights with the colours exchanged.
    #[inline]
    pub const fn swapped(self) -> Self {
        CastlingRights {
            white_kingside: self.black_kingside,
            white_queenside: self.black_queenside,
            black_kingside: self.white_kingside,
            black_queenside: self.white_queenside,
        }
    }
}

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_row(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, row: u8) -> Square {
    row * 8 + file
}

/// Shift `square` by a file/row delta, `None` when the result leaves the board.
#[inline]
pub fn offset_square(square: Square, d_file: i8, d_row: i8) -> Option<Square> {
    let file = square_file(square) as i8 + d_file;
    let row = square_row(square) as i8 + d_row;
    if !(0..8).contains(&file) || !(0..8).contains(&row) {
        return None;
    }
    Some(square_at(file as u8, row as u8))
}
