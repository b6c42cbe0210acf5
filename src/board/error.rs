//! Error types for board operations.

use std::fmt;

use super::{Color, PieceKind, Square};

/// A requested move is not in the legal move set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the source square
    NoPieceAt { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongSide { square: Square, side: Color },
    /// The move is not legal in the current position
    Illegal { from: Square, to: Square },
    /// The requested promotion kind is not a valid promotion target
    InvalidPromotion { kind: PieceKind },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::WrongSide { square, side } => {
                write!(f, "Piece on {square} does not belong to {side}")
            }
            MoveError::Illegal { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote to '{}'", kind.to_char())
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The board is structurally invalid for search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    MultipleKings { color: Color, count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => write!(f, "{color} has no king"),
            BoardError::MultipleKings { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for board text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Board text has the wrong number of characters
    WrongLength { expected: usize, found: usize },
    /// A two-character cell is neither empty nor a valid piece
    InvalidCell { index: usize, cell: String },
    /// The trailing turn character is not 'w' or 'b'
    InvalidTurn { found: char },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongLength { expected, found } => {
                write!(f, "Board text must be {expected} characters, found {found}")
            }
            NotationError::InvalidCell { index, cell } => {
                write!(f, "Invalid cell '{cell}' at square {index}")
            }
            NotationError::InvalidTurn { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-8)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-8)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-8)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
