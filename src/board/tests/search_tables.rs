//! Tests for search tables: killer moves, history and move ordering.

use super::{find_move, sq};
use crate::board::{
    mvv_lva_score, BoardBuilder, Color, HistoryTable, KillerTable, Move, PieceKind, Position,
    SearchState, EMPTY_MOVE,
};

fn quiet(from: &str, to: &str) -> Move {
    Move::quiet(sq(from), sq(to))
}

// ============================================================================
// Killer Move Tests
// ============================================================================

#[test]
fn test_killer_empty_initially() {
    let table = KillerTable::new();
    for ply in 0..10 {
        assert_eq!(table.primary(ply), EMPTY_MOVE);
        assert_eq!(table.secondary(ply), EMPTY_MOVE);
    }
}

#[test]
fn test_killer_update_shifts_to_secondary() {
    let mut table = KillerTable::new();
    let mv1 = quiet("e2", "e4");
    let mv2 = quiet("d2", "d4");

    table.update(0, mv1);
    assert_eq!(table.primary(0), mv1);
    assert_eq!(table.secondary(0), EMPTY_MOVE);

    table.update(0, mv2);
    assert_eq!(table.primary(0), mv2);
    assert_eq!(table.secondary(0), mv1);
}

#[test]
fn test_killer_same_move_no_duplicate() {
    let mut table = KillerTable::new();
    let mv = quiet("e2", "e4");
    table.update(3, mv);
    table.update(3, mv);
    assert_eq!(table.primary(3), mv);
    assert_eq!(table.secondary(3), EMPTY_MOVE);
    assert_eq!(table.primary(2), EMPTY_MOVE);
}

#[test]
fn test_killer_out_of_range_ply_ignored() {
    let mut table = KillerTable::new();
    table.update(10_000, quiet("e2", "e4"));
    assert_eq!(table.primary(10_000), EMPTY_MOVE);
}

#[test]
fn test_killer_reset() {
    let mut table = KillerTable::new();
    table.update(0, quiet("e2", "e4"));
    table.reset();
    assert_eq!(table.primary(0), EMPTY_MOVE);
}

// ============================================================================
// History Tests
// ============================================================================

#[test]
fn test_history_rewards_depth_squared() {
    let mut table = HistoryTable::new();
    let mv = quiet("b1", "c3");
    table.update(mv, 3);
    assert_eq!(table.score(mv), 9);
    table.update(mv, 2);
    assert_eq!(table.score(mv), 13);
    assert_eq!(table.score(quiet("c3", "b1")), 0);
}

#[test]
fn test_history_is_capped() {
    let mut table = HistoryTable::new();
    let mv = quiet("b1", "c3");
    for _ in 0..1_000 {
        table.update(mv, 30);
    }
    let capped = table.score(mv);
    table.update(mv, 30);
    assert_eq!(table.score(mv), capped);
    assert!(capped < 900 * 1_000);
}

#[test]
fn test_history_decay_and_reset() {
    let mut table = HistoryTable::new();
    let mv = quiet("b1", "c3");
    table.update(mv, 8);
    table.decay();
    assert_eq!(table.score(mv), 16);
    table.reset();
    assert_eq!(table.score(mv), 0);
}

// ============================================================================
// Ordering Tests
// ============================================================================

fn capture_position() -> Position {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("i9"), Color::Black, PieceKind::King)
        .moved_piece(sq("d4"), Color::White, PieceKind::Pawn)
        .piece(sq("e5"), Color::White, PieceKind::Queen)
        .piece(sq("c5"), Color::Black, PieceKind::Queen)
        .moved_piece(sq("e6"), Color::Black, PieceKind::Pawn)
        .build_position()
}

#[test]
fn test_mvv_lva_prefers_cheap_attacker_on_big_victim() {
    let mut position = capture_position();
    let pawn_takes_queen = find_move(&mut position, "d4", "c5");
    let queen_takes_queen = find_move(&mut position, "e5", "c5");
    let queen_takes_pawn = find_move(&mut position, "e5", "e6");

    let board = position.board();
    assert!(mvv_lva_score(board, pawn_takes_queen) > mvv_lva_score(board, queen_takes_queen));
    assert!(mvv_lva_score(board, queen_takes_queen) > mvv_lva_score(board, queen_takes_pawn));
}

#[test]
fn test_order_moves_tt_then_captures_then_killers() {
    let mut position = capture_position();
    let moves = position.legal_moves(Color::White);
    let tt_move = find_move(&mut position, "e1", "f1");
    let killer = find_move(&mut position, "e1", "d1");

    let mut state = SearchState::new(1);
    state.tables.killer_moves.update(2, killer);
    let ordered = state
        .tables
        .order_moves(position.board(), &moves, Some(tt_move), 2);
    let order: Vec<Move> = ordered.iter().map(|s| s.mv).collect();

    assert_eq!(order.len(), moves.len());
    assert_eq!(order[0], tt_move);
    assert_eq!((order[1].from(), order[1].to()), (sq("d4"), sq("c5")));
    let first_quiet = order[1..].iter().position(|m| !m.is_tactical()).unwrap() + 1;
    assert!(order[1..first_quiet].iter().all(|m| m.is_tactical()));
    assert_eq!(order[first_quiet], killer);
}
