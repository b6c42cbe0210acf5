use std::time::Instant;

use super::constants::{INFINITY, MATE_THRESHOLD};
use super::context::SearchContext;
use super::{mate_in, SearchConfig, SearchIterationInfo, SearchResult, SearchState};
use crate::board::{Move, Position};

impl SearchContext<'_> {
    /// Search every root move at `depth`. Returns `None` if aborted.
    ///
    /// Ties keep the earlier move in the ordered list.
    fn search_root(&mut self, depth: u32, previous_best: Option<Move>) -> Option<(i32, Move)> {
        let side = self.position.side_to_move();
        let moves = self.position.legal_moves(side);
        let tt_move = previous_best.or_else(|| {
            self.state
                .tables
                .tt
                .lookup(self.position.hash())
                .and_then(|e| e.best_move())
        });
        let ordered = self
            .state
            .tables
            .order_moves(self.position.board(), &moves, tt_move, 0);

        let mut alpha = -INFINITY;
        let mut best: Option<(i32, Move)> = None;

        for scored in ordered.iter() {
            let m = scored.mv;
            let Ok(record) = self.position.apply(m) else {
                continue;
            };
            let score = -self.alphabeta(depth - 1, -INFINITY, -alpha, 1);
            self.position.unapply(record);

            if self.aborted {
                return None;
            }
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, m));
                alpha = alpha.max(score);
            }
        }

        if let Some((score, mv)) = best {
            self.store_root(depth, score, mv);
        }
        best
    }

    fn store_root(&mut self, depth: u32, score: i32, mv: Move) {
        self.state.tables.tt.store(
            self.position.hash(),
            depth,
            super::context::score_to_tt(score, 0),
            crate::tt::BoundType::Exact,
            Some(mv),
            self.state.generation,
        );
    }

    /// Iterative deepening; only completed iterations update the result.
    pub fn iterative_deepening(&mut self, max_depth: u32) -> SearchResult {
        let side = self.position.side_to_move();
        let moves = self.position.legal_moves(side);

        let mut result = SearchResult {
            best_move: moves.first(),
            score: self.evaluate(),
            depth_reached: 0,
            nodes: 0,
            principal_variation: Vec::new(),
            completed: true,
        };

        if moves.is_empty() {
            result.score = if self.position.is_in_check(side) {
                -super::MATE_SCORE
            } else {
                0
            };
            return result;
        }

        for depth in 1..=max_depth {
            let Some((score, best_move)) = self.search_root(depth, result.best_move) else {
                log_debug!(
                    "search: depth {} abandoned after {} nodes",
                    depth,
                    self.nodes
                );
                break;
            };

            result.best_move = Some(best_move);
            result.score = score;
            result.depth_reached = depth;

            let mut pv = self.extract_pv(depth as usize);
            if pv.first() != Some(&best_move) {
                pv = vec![best_move];
            }
            let pv_str = Self::format_pv(&pv);
            result.principal_variation = pv;

            let elapsed = self.start_time.elapsed().as_millis() as u64;
            log_debug!(
                "search: depth {} score {} nodes {} time {}ms pv {}",
                depth,
                score,
                self.nodes,
                elapsed,
                pv_str
            );

            if let Some(cb) = &self.info_callback {
                let nps = if elapsed > 0 {
                    self.nodes * 1000 / elapsed
                } else {
                    0
                };
                let info = SearchIterationInfo {
                    depth,
                    nodes: self.nodes,
                    nps,
                    time_ms: elapsed,
                    score,
                    mate_in: mate_in(score),
                    pv: pv_str,
                    seldepth: self.state.stats.seldepth,
                    tt_hits: self.state.stats.tt_hits,
                };
                cb(&info);
            }

            // A mate found within the full-width horizon cannot get shorter
            if score.abs() >= MATE_THRESHOLD {
                let mate_plies = (super::MATE_SCORE - score.abs()) as u32;
                if mate_plies <= depth {
                    break;
                }
            }
        }

        result.completed = !self.aborted;
        result
    }
}

/// Run a search on `position` for its side to move.
pub(crate) fn run(position: &mut Position, state: &mut SearchState, config: &SearchConfig) -> SearchResult {
    state.new_search();

    let mut ctx = SearchContext {
        position,
        state,
        stop: config.stop.as_deref(),
        start_time: Instant::now(),
        time_limit_ms: config.time_limit_ms,
        node_limit: config.node_limit,
        nodes: 0,
        aborted: false,
        info_callback: config.info_callback.clone(),
    };

    let mut result = ctx.iterative_deepening(config.effective_max_depth());
    result.nodes = ctx.nodes;
    ctx.state.stats.nodes = ctx.nodes;
    ctx.state.stats.total_nodes = ctx.state.stats.total_nodes.saturating_add(ctx.nodes);

    log_info!(
        "search: best {} score {} depth {} nodes {} completed {}",
        result
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string()),
        result.score,
        result.depth_reached,
        result.nodes,
        result.completed
    );
    result
}
