#[macro_use]
mod logging;

pub mod advisor;
pub mod board;
pub mod book;
pub mod puzzle;
pub mod tt;
pub mod zobrist;

pub use advisor::{Advice, Advisor, AdvisorConfig};
pub use board::{Board, Color, Move, Piece, PieceKind, Position, Square};
pub use book::{BookMove, BookPolicy, BookPosition, OpeningBook};
pub use tt::TranspositionTable;
