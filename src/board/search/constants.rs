//! Search constants.

use crate::board::MAX_PLY;

// ============================================================================
// SCORES
// ============================================================================

/// Score of delivering mate at the root; mate at ply `n` scores `MATE_SCORE - n`
pub const MATE_SCORE: i32 = 30000;

/// Scores with absolute value >= this are considered checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Bound wider than any reachable score
pub const INFINITY: i32 = MATE_SCORE + 1;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Maximum quiescence search depth to prevent explosion
pub const MAX_QSEARCH_DEPTH: i32 = 6;

/// Default iterative deepening limit when none is given
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Time and stop flag are checked when `nodes & CHECK_INTERVAL_MASK == 0`
pub const CHECK_INTERVAL_MASK: u64 = 2047;

/// Check extensions stop past this ply
pub const MAX_EXTENSION_PLY: usize = MAX_PLY / 2;

// ============================================================================
// REDUCTIONS
// ============================================================================

/// Null-move pruning needs at least this much depth remaining
pub const NULL_MOVE_MIN_DEPTH: u32 = 3;

/// Base null-move reduction; grows by one every `NULL_MOVE_DEPTH_DIVISOR` plies
pub const NULL_MOVE_BASE_REDUCTION: u32 = 3;

pub const NULL_MOVE_DEPTH_DIVISOR: u32 = 6;

/// Late move reductions apply from this depth
pub const LMR_MIN_DEPTH: u32 = 3;

/// Moves at this index or later in the ordered list may be reduced
pub const LMR_MOVE_INDEX: usize = 4;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Ordered: TT > captures > killers > quiet

/// Hash move (from transposition table) - highest priority
pub const TT_MOVE_SCORE: i32 = 1 << 20;

/// Captures and promotions sit above every quiet move
pub const TACTICAL_BASE_SCORE: i32 = 1 << 16;

/// First killer move (quiet that caused beta cutoff at same ply)
pub const KILLER1_SCORE: i32 = 20000;

/// Second killer move (replaced killer)
pub const KILLER2_SCORE: i32 = 10000;

/// History scores are clamped below the killer scores
pub const HISTORY_MAX: i32 = 8000;
