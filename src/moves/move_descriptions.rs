//! Typed description of a single generated move.

use std::fmt;

use crate::game_state::chess_types::{CastleWing, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleWing),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub kind: MoveKind,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Long algebraic notation, for example `e2e4` or `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&square_to_algebraic(self.from));
        out.push_str(&square_to_algebraic(self.to));
        if let Some(promotion) = self.promotion {
            out.push(promotion_to_char(promotion));
        }
        out
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

pub fn promotion_to_char(piece: PieceKind) -> char {
    match piece {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::Pawn => 'p',
        PieceKind::King => 'k',
    }
}
