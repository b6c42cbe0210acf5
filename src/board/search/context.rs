//! Core alpha-beta search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::board::eval::evaluate;
use crate::board::{Move, Position, MAX_PLY};
use crate::tt::BoundType;

use super::constants::{
    CHECK_INTERVAL_MASK, INFINITY, LMR_MIN_DEPTH, LMR_MOVE_INDEX, MATE_SCORE, MATE_THRESHOLD,
    MAX_EXTENSION_PLY, NULL_MOVE_BASE_REDUCTION, NULL_MOVE_DEPTH_DIVISOR, NULL_MOVE_MIN_DEPTH,
};
use super::{SearchInfoCallback, SearchState};

/// Search context for a single search
pub(crate) struct SearchContext<'a> {
    pub position: &'a mut Position,
    pub state: &'a mut SearchState,
    pub stop: Option<&'a AtomicBool>,
    pub start_time: Instant,
    pub time_limit_ms: u64,
    pub node_limit: u64,
    pub nodes: u64,
    /// Set once any limit is hit; the iteration in progress is discarded
    pub aborted: bool,
    pub info_callback: Option<SearchInfoCallback>,
}

/// Convert a score to its TT form: mate scores become relative to the node.
pub(crate) fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

/// Convert a TT score back to a root-relative score.
pub(crate) fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

impl SearchContext<'_> {
    /// Check limits. Node limit every node; time and stop flag on the
    /// node cadence.
    pub fn should_stop(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if self.node_limit > 0 && self.nodes >= self.node_limit {
            self.aborted = true;
        } else if self.nodes & CHECK_INTERVAL_MASK == 0 {
            if self.stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                self.aborted = true;
            } else if self.time_limit_ms > 0 {
                let elapsed = self.start_time.elapsed().as_millis() as u64;
                if elapsed >= self.time_limit_ms {
                    self.aborted = true;
                }
            }
        }
        self.aborted
    }

    /// Static evaluation from the side to move's point of view.
    pub fn evaluate(&self) -> i32 {
        let side = self.position.side_to_move();
        evaluate(self.position.board(), side) * side.sign()
    }

    /// Draw by rule inside the tree. Repetition counts on the second
    /// occurrence.
    fn is_draw_node(&self) -> bool {
        self.position.is_fifty_move_draw()
            || self.position.is_repetition()
            || self.position.board().is_insufficient_material()
    }

    fn lookup_tt(
        &mut self,
        depth: u32,
        alpha: i32,
        beta: i32,
        ply: usize,
        pv_node: bool,
    ) -> (Option<i32>, Option<Move>) {
        let Some(entry) = self.state.tables.tt.lookup(self.position.hash()) else {
            return (None, None);
        };
        self.state.stats.tt_hits += 1;
        let tt_move = entry.best_move();
        if ply == 0 || pv_node || entry.depth() < depth {
            return (None, tt_move);
        }
        let score = score_from_tt(entry.score(), ply);
        let cutoff = match entry.bound_type() {
            BoundType::Exact => true,
            BoundType::LowerBound => score >= beta,
            BoundType::UpperBound => score <= alpha,
        };
        (cutoff.then_some(score), tt_move)
    }

    fn store_tt(&mut self, depth: u32, score: i32, bound: BoundType, best_move: Option<Move>, ply: usize) {
        if self.aborted {
            return;
        }
        self.state.tables.tt.store(
            self.position.hash(),
            depth,
            score_to_tt(score, ply),
            bound,
            best_move,
            self.state.generation,
        );
    }

    /// Give the opponent a free move; if a reduced search still fails high,
    /// the node is cut. Skipped in check, in pawn-only material and near
    /// mate bounds.
    fn try_null_move(&mut self, depth: u32, beta: i32, ply: usize) -> Option<i32> {
        let side = self.position.side_to_move();
        if depth < NULL_MOVE_MIN_DEPTH
            || beta.abs() >= MATE_THRESHOLD
            || !self.position.board().has_non_pawn_material(side)
            || self.evaluate() < beta
        {
            return None;
        }

        let reduction = NULL_MOVE_BASE_REDUCTION + depth / NULL_MOVE_DEPTH_DIVISOR;
        let record = self.position.apply_null();
        let score = -self.search_node(depth.saturating_sub(reduction + 1), -beta, -beta + 1, ply + 1, false);
        self.position.unapply_null(record);

        (!self.aborted && score >= beta).then_some(beta)
    }

    /// Negamax alpha-beta. Returns 0 once aborted; callers discard it.
    pub fn alphabeta(&mut self, depth: u32, alpha: i32, beta: i32, ply: usize) -> i32 {
        self.search_node(depth, alpha, beta, ply, true)
    }

    fn search_node(&mut self, mut depth: u32, mut alpha: i32, beta: i32, ply: usize, allow_null: bool) -> i32 {
        self.nodes += 1;
        if self.should_stop() {
            return 0;
        }
        if ply as u32 > self.state.stats.seldepth {
            self.state.stats.seldepth = ply as u32;
        }

        if ply > 0 && self.is_draw_node() {
            return 0;
        }
        if ply >= MAX_PLY - 1 {
            return self.evaluate();
        }

        let side = self.position.side_to_move();
        let in_check = self.position.is_in_check(side);
        if in_check && ply < MAX_EXTENSION_PLY {
            depth += 1;
        }
        let pv_node = beta - alpha > 1;

        let (cutoff, tt_move) = self.lookup_tt(depth, alpha, beta, ply, pv_node);
        if let Some(score) = cutoff {
            return score;
        }

        if depth == 0 {
            return self.quiesce(alpha, beta, ply, 0);
        }

        if allow_null && !pv_node && !in_check && ply > 0 {
            if let Some(score) = self.try_null_move(depth, beta, ply) {
                return score;
            }
            if self.aborted {
                return 0;
            }
        }

        let moves = self.position.legal_moves(side);
        if moves.is_empty() {
            return if in_check { -(MATE_SCORE - ply as i32) } else { 0 };
        }

        let tt_move = tt_move.filter(|mv| moves.contains(*mv));
        let ordered = self
            .state
            .tables
            .order_moves(self.position.board(), &moves, tt_move, ply);

        let alpha_orig = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for (index, scored) in ordered.iter().enumerate() {
            let m = scored.mv;
            let Ok(record) = self.position.apply(m) else {
                continue;
            };

            let score = if index == 0 {
                -self.search_node(depth - 1, -beta, -alpha, ply + 1, true)
            } else {
                let gives_check = self.position.is_in_check(side.opponent());
                let reduction = u32::from(
                    depth >= LMR_MIN_DEPTH
                        && index >= LMR_MOVE_INDEX
                        && !in_check
                        && !gives_check
                        && !m.is_tactical(),
                );
                let mut score = -self.search_node(depth - 1 - reduction, -alpha - 1, -alpha, ply + 1, true);
                if reduction > 0 && score > alpha {
                    score = -self.search_node(depth - 1, -alpha - 1, -alpha, ply + 1, true);
                }
                if score > alpha && score < beta {
                    score = -self.search_node(depth - 1, -beta, -alpha, ply + 1, true);
                }
                score
            };
            self.position.unapply(record);

            if self.aborted {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(m);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                if !m.is_tactical() {
                    self.state.tables.killer_moves.update(ply, m);
                    self.state.tables.history.update(m, depth);
                }
                self.store_tt(depth, best_score, BoundType::LowerBound, best_move, ply);
                return best_score;
            }
        }

        let bound = if best_score > alpha_orig {
            BoundType::Exact
        } else {
            BoundType::UpperBound
        };
        self.store_tt(depth, best_score, bound, best_move, ply);
        best_score
    }

    /// Extract the principal variation from the TT, verifying each move.
    pub fn extract_pv(&mut self, max_len: usize) -> Vec<Move> {
        let mut pv = Vec::with_capacity(max_len);
        let mut seen_hashes: Vec<u64> = Vec::with_capacity(max_len);
        let mut records = Vec::with_capacity(max_len);

        while pv.len() < max_len {
            let hash = self.position.hash();
            // TT cycles
            if seen_hashes.contains(&hash) {
                break;
            }
            seen_hashes.push(hash);

            let Some(mv) = self
                .state
                .tables
                .tt
                .lookup(hash)
                .and_then(|entry| entry.best_move())
            else {
                break;
            };
            if !self.position.is_legal(mv) {
                break;
            }
            let Ok(record) = self.position.apply(mv) else {
                break;
            };
            pv.push(mv);
            records.push(record);
        }

        for record in records.into_iter().rev() {
            self.position.unapply(record);
        }
        pv
    }

    /// Format PV moves as a space-separated string
    pub fn format_pv(pv: &[Move]) -> String {
        pv.iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
