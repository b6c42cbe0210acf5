//! Move ordering utilities for search.

use super::constants::{
    KILLER1_SCORE, KILLER2_SCORE, TACTICAL_BASE_SCORE, TT_MOVE_SCORE,
};
use super::SearchTables;
use crate::board::{Board, Move, MoveList, PieceKind, ScoredMoveList};

/// MVV-LVA score: most valuable victim first, least valuable attacker as
/// the tie-breaker. Promotions add the gain of the promoted piece.
#[must_use]
pub fn mvv_lva_score(board: &Board, mv: Move) -> i32 {
    let attacker = board
        .piece_at(mv.from())
        .map_or(0, |p| ordering_value(p.kind));
    let victim = if mv.is_en_passant() {
        PieceKind::Pawn.value()
    } else {
        board.piece_at(mv.to()).map_or(0, |p| ordering_value(p.kind))
    };
    let promotion = mv
        .promotion()
        .map_or(0, |kind| kind.value() - PieceKind::Pawn.value());
    victim * 10 - attacker / 10 + promotion
}

/// Piece value with the king capped so it sorts as the most valuable attacker
/// without overflowing the ordering scores.
fn ordering_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 2000,
        other => other.value(),
    }
}

impl SearchTables {
    /// Score moves for ordering: TT move, captures and promotions by
    /// MVV-LVA, killers, then quiet moves by history.
    pub(crate) fn order_moves(
        &self,
        board: &Board,
        moves: &MoveList,
        tt_move: Option<Move>,
        ply: usize,
    ) -> ScoredMoveList {
        let mut scored = ScoredMoveList::new();
        for &m in moves {
            let score = if Some(m) == tt_move {
                TT_MOVE_SCORE
            } else if m.is_tactical() {
                TACTICAL_BASE_SCORE + mvv_lva_score(board, m)
            } else if m == self.killer_moves.primary(ply) {
                KILLER1_SCORE
            } else if m == self.killer_moves.secondary(ply) {
                KILLER2_SCORE
            } else {
                self.history.score(m)
            };
            scored.push(m, score);
        }
        scored.sort_by_score_desc();
        scored
    }
}
