//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - piece identity and movement patterns
//! - `Square` - compact index into the 81-square grid
//! - `Move` and `MoveList` - move representation

mod castling;
mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind, DEFAULT_PROMOTION};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};

pub(crate) use castling::{CastleSide, KING_HOME_COL};
pub(crate) use moves::{ScoredMoveList, EMPTY_MOVE, MAX_PLY};
pub(crate) use piece::{Offset, KING_OFFSETS, KNIGHT_OFFSETS, PROMOTION_KINDS};
