//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening from depth 1, keeping only completed iterations
//! - Negamax alpha-beta over legal moves
//! - Quiescence search with stand-pat
//! - Move ordering (TT move, MVV-LVA, killers, history)
//! - Transposition table for move ordering and cutoffs
//! - Cancellation by time limit, node limit or an external stop flag

mod constants;
mod context;
mod iterative;
mod move_order;
mod quiescence;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::tt::TranspositionTable;

use super::error::BoardError;
use super::{Color, Move, Position, EMPTY_MOVE, MAX_PLY};

pub use constants::{MATE_SCORE, MATE_THRESHOLD};
pub use move_order::mvv_lva_score;

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

/// Shared cancellation flag. Setting it to `true` stops a running search
/// at its next check.
pub type StopFlag = Arc<AtomicBool>;

/// Create a cleared stop flag.
#[must_use]
pub fn stop_flag() -> StopFlag {
    Arc::new(AtomicBool::new(false))
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Score from the searching side's point of view
    pub score: i32,
    /// Deepest fully completed iteration (0 if none completed)
    pub depth_reached: u32,
    pub nodes: u64,
    pub principal_variation: Vec<Move>,
    /// False when the search was cut short by time, nodes or the stop flag
    pub completed: bool,
}

impl SearchResult {
    /// Moves to mate when the score is a mate score; negative when the
    /// searching side is getting mated.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        mate_in(self.score)
    }
}

pub(crate) fn mate_in(score: i32) -> Option<i32> {
    if score.abs() < MATE_THRESHOLD {
        None
    } else if score > 0 {
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        Some(-(MATE_SCORE + score + 1) / 2)
    }
}

/// Statistics tracked during search
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub nodes: u64,
    pub seldepth: u32,
    pub total_nodes: u64,
    pub tt_hits: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.seldepth = 0;
        self.tt_hits = 0;
    }
}

pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[EMPTY_MOVE; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(EMPTY_MOVE, |row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(EMPTY_MOVE, |row| row[1])
    }

    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0] != mv {
            row[1] = row[0];
            row[0] = mv;
        }
    }

    pub fn reset(&mut self) {
        for killers in &mut self.slots {
            *killers = [EMPTY_MOVE; 2];
        }
    }
}

const HISTORY_SIZE: usize = super::NUM_SQUARES * super::NUM_SQUARES;

pub struct HistoryTable {
    entries: Box<[i32; HISTORY_SIZE]>,
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: Box::new([0; HISTORY_SIZE]),
        }
    }

    fn idx(mv: Move) -> usize {
        mv.from().index() * super::NUM_SQUARES + mv.to().index()
    }

    #[must_use]
    pub fn score(&self, mv: Move) -> i32 {
        self.entries[Self::idx(mv)]
    }

    /// Reward a quiet move that caused a beta cutoff
    pub fn update(&mut self, mv: Move, depth: u32) {
        let bonus = (depth * depth) as i32;
        let entry = &mut self.entries[Self::idx(mv)];
        *entry = entry.saturating_add(bonus).min(constants::HISTORY_MAX);
    }

    pub fn decay(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry >>= 2;
        }
    }

    pub fn reset(&mut self) {
        self.entries.fill(0);
    }
}

/// Tables used during search (TT, killers, history)
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killer_moves: KillerTable,
    pub history: HistoryTable,
}

/// Search state persisted across searches
pub struct SearchState {
    pub stats: SearchStats,
    pub tables: SearchTables,
    pub generation: u16,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tables: SearchTables {
                tt: TranspositionTable::new(tt_mb),
                killer_moves: KillerTable::new(),
                history: HistoryTable::new(),
            },
            generation: 0,
        }
    }

    /// Prepare for a new search: age the TT, decay history, drop killers.
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.stats.reset_search();
        self.tables.history.decay();
        self.tables.killer_moves.reset();
    }

    /// Forget everything learned so far.
    pub fn clear(&mut self) {
        self.tables.tt.clear();
        self.tables.history.reset();
        self.tables.killer_moves.reset();
        self.stats = SearchStats::default();
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tables.tt.hashfull_per_mille()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(DEFAULT_TT_MB)
    }
}

// ============================================================================
// SEARCH API
// ============================================================================

/// Configuration for a search operation.
#[derive(Clone, Default)]
pub struct SearchConfig {
    /// Maximum depth to search (None = unlimited, capped below `MAX_PLY`)
    pub max_depth: Option<u32>,
    /// Time limit in milliseconds (0 = unlimited)
    pub time_limit_ms: u64,
    /// Node limit (0 = unlimited)
    pub node_limit: u64,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
    /// Optional external stop flag
    pub stop: Option<StopFlag>,
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Create a time-limited search config
    #[must_use]
    pub fn time(time_limit_ms: u64) -> Self {
        SearchConfig {
            time_limit_ms,
            ..Default::default()
        }
    }

    /// Set depth limit
    #[must_use]
    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set time limit
    #[must_use]
    pub fn with_time(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Set node limit
    #[must_use]
    pub fn with_nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    /// Attach an external stop flag.
    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    fn effective_max_depth(&self) -> u32 {
        self.max_depth
            .unwrap_or(constants::DEFAULT_MAX_DEPTH)
            .clamp(1, (MAX_PLY / 2) as u32)
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("max_depth", &self.max_depth)
            .field("time_limit_ms", &self.time_limit_ms)
            .field("node_limit", &self.node_limit)
            .field("info_callback", &self.info_callback.is_some())
            .field(
                "stop",
                &self.stop.as_ref().map(|s| s.load(Ordering::Relaxed)),
            )
            .finish()
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub score: i32,
    pub mate_in: Option<i32>,
    pub pv: String,
    pub seldepth: u32,
    pub tt_hits: u64,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Search for the best move for `side`.
///
/// The board is validated first: each color needs exactly one king. If
/// `side` is not the side to move, the search runs on a copy with the turn
/// handed to `side`; otherwise `position` is searched in place and
/// restored before returning.
///
/// # Example
/// ```
/// use chess9_engine::board::{search, Color, Position, SearchConfig, SearchState};
///
/// let mut position = Position::new();
/// let mut state = SearchState::new(1);
/// let result = search(&mut position, Color::White, SearchConfig::depth(2), &mut state).unwrap();
/// assert!(result.best_move.is_some());
/// ```
#[allow(clippy::needless_pass_by_value)] // Config is intentionally consumed
pub fn search(
    position: &mut Position,
    side: Color,
    config: SearchConfig,
    state: &mut SearchState,
) -> Result<SearchResult, BoardError> {
    position.board().validate()?;

    if position.side_to_move() == side {
        Ok(iterative::run(position, state, &config))
    } else {
        let mut local = position.clone();
        local.set_side_to_move(side);
        Ok(iterative::run(&mut local, state, &config))
    }
}

/// Time-boxed search with a fresh, small transposition table.
pub fn search_timed(
    position: &mut Position,
    side: Color,
    time_limit_ms: u64,
) -> Result<SearchResult, BoardError> {
    let mut state = SearchState::new(DEFAULT_TT_MB);
    search(position, side, SearchConfig::time(time_limit_ms), &mut state)
}
