//! 9×9 board representation and game logic.
//!
//! Uses a square-indexed mailbox with incrementally updated Zobrist hashes.
//! Supports the full rules of the variant: compound pieces (Archbishop,
//! Chancellor, Angel), castling, en passant, promotion and the draw rules.
//!
//! # Example
//! ```
//! use chess9_engine::board::{Color, Position};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod draw;
mod error;
mod eval;
mod legality;
mod make_unmake;
mod mate;
mod movegen;
mod notation;
mod perft;
mod position;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use draw::{DrawReason, FIFTY_MOVE_LIMIT, REPETITION_LIMIT};
pub use error::{BoardError, MoveError, NotationError, SquareError};
pub use eval::{evaluate, MAX_PHASE};
pub use mate::find_forced_mate;
pub use notation::BOARD_TEXT_LEN;
pub use position::{MoveRecord, Position, PositionHistory, SpecialMove};
pub use state::{Board, EnPassant};
pub use types::{
    Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square, BOARD_SIZE,
    DEFAULT_PROMOTION, NUM_SQUARES,
};

// Public API - search functions and configuration
pub use search::{
    search, search_timed, stop_flag, SearchConfig, SearchInfoCallback, SearchIterationInfo,
    SearchResult, SearchState, StopFlag, DEFAULT_TT_MB, MATE_SCORE, MATE_THRESHOLD,
};

// Re-export search internals for users who need fine-grained control
pub use search::{mvv_lva_score, HistoryTable, KillerTable, SearchStats, SearchTables};

pub(crate) use types::{
    CastleSide, Offset, ScoredMoveList, EMPTY_MOVE, KING_HOME_COL, KING_OFFSETS, KNIGHT_OFFSETS,
    MAX_PLY, PROMOTION_KINDS,
};
