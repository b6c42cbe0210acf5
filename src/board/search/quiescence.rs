use super::constants::{INFINITY, MATE_SCORE, MAX_QSEARCH_DEPTH};
use super::context::SearchContext;
use super::move_order::mvv_lva_score;
use crate::board::{ScoredMoveList, MAX_PLY};

impl SearchContext<'_> {
    /// Quiescence search over captures and promotions with stand-pat.
    /// In check every legal evasion is searched instead.
    pub fn quiesce(&mut self, mut alpha: i32, beta: i32, ply: usize, qdepth: i32) -> i32 {
        self.nodes += 1;
        if self.should_stop() {
            return 0;
        }

        let stand_pat = self.evaluate();
        if qdepth >= MAX_QSEARCH_DEPTH || ply >= MAX_PLY - 1 {
            return stand_pat;
        }

        let side = self.position.side_to_move();
        let in_check = self.position.is_in_check(side);
        let mut best_score = if in_check { -INFINITY } else { stand_pat };

        let moves = if in_check {
            let moves = self.position.legal_moves(side);
            if moves.is_empty() {
                return -(MATE_SCORE - ply as i32);
            }
            moves
        } else {
            if stand_pat >= beta {
                return stand_pat;
            }
            if alpha < stand_pat {
                alpha = stand_pat;
            }
            self.position.legal_captures(side)
        };

        let mut sorted_moves = ScoredMoveList::new();
        for &m in &moves {
            sorted_moves.push(m, mvv_lva_score(self.position.board(), m));
        }
        sorted_moves.sort_by_score_desc();

        for scored in sorted_moves.iter() {
            let m = scored.mv;
            let Ok(record) = self.position.apply(m) else {
                continue;
            };
            let score = -self.quiesce(-beta, -alpha, ply + 1, qdepth + 1);
            self.position.unapply(record);

            if self.aborted {
                return 0;
            }
            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
            if score > best_score {
                best_score = score;
            }
        }

        best_score
    }
}
