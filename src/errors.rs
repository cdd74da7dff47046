//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by position construction,
//! direct move application, notation parsing, classification and engines.
//! Move generators report through `MoveGenerationError`, which converts into
//! `ChessError` so search code can propagate either with `?`.
//!
//! Variants fall into two groups:
//! - malformed input (FEN, algebraic text, unknown move text) that callers can
//!   report back to a user;
//! - broken invariants (missing or duplicate kings, moves that bypass the
//!   generator) which indicate a programming error upstream.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::move_generator::MoveGenerationError;

#[derive(Debug, Error)]
pub enum ChessError {
    /// A position was built without a king for `Color`.
    #[error("position has no {0} king")]
    MissingKing(Color),

    /// A position was built with more than one king for `Color`.
    #[error("position has {count} {color} kings")]
    MultipleKings { color: Color, count: usize },

    #[error("en-passant file {0} is outside 0..8")]
    InvalidEnPassantFile(u8),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// Direct move application found no piece on the origin square.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    /// Direct move application named a square outside the board.
    #[error("square {0} is off the board")]
    OffBoard(Square),

    /// Direct move application named a different piece than the origin holds.
    #[error("square {square} holds a {found:?}, not a {expected:?}")]
    PieceMismatch {
        square: Square,
        expected: PieceKind,
        found: PieceKind,
    },

    /// Direct move application tried to move the opponent's piece.
    #[error("piece on square {0} does not belong to the side to move")]
    WrongSideToMove(Square),

    /// Direct move application tried to land on one of the mover's own pieces.
    #[error("move onto square {0} would capture an own piece")]
    CaptureOwnPiece(Square),

    /// Long algebraic text did not match any legal move.
    #[error("no legal move matches {0}")]
    UnknownMove(String),

    #[error(transparent)]
    MoveGeneration(#[from] MoveGenerationError),

    #[error("engine failure: {0}")]
    Engine(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
