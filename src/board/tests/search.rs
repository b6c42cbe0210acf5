//! Search algorithm tests.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use super::sq;
use crate::board::{
    search, stop_flag, BoardBuilder, BoardError, Color, PieceKind, Position, SearchConfig,
    SearchIterationInfo, SearchState, MATE_SCORE,
};

fn queen_edge_mate() -> Position {
    BoardBuilder::new()
        .piece(sq("a9"), Color::Black, PieceKind::King)
        .piece(sq("c7"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::White, PieceKind::Queen)
        .build_position()
}

// ============================================================================
// Result shape
// ============================================================================

#[test]
fn finds_mate_in_one() {
    let mut position = queen_edge_mate();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::White, SearchConfig::depth(4), &mut state).unwrap();

    let mv = result.best_move.expect("a move");
    assert_eq!(result.score, MATE_SCORE - 1);
    assert_eq!(result.mate_in(), Some(1));
    assert!(result.completed);

    position.apply(mv).unwrap();
    assert!(position.is_checkmate(Color::Black));
}

#[test]
fn mated_side_sees_negative_mate() {
    // Black to move is already mated
    let mut position = BoardBuilder::new()
        .piece(sq("a9"), Color::Black, PieceKind::King)
        .piece(sq("b8"), Color::White, PieceKind::Queen)
        .piece(sq("c7"), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build_position();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::Black, SearchConfig::depth(3), &mut state).unwrap();
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn stalemate_has_no_move_and_zero_score() {
    let mut position = BoardBuilder::new()
        .piece(sq("a9"), Color::Black, PieceKind::King)
        .piece(sq("b7"), Color::White, PieceKind::Queen)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build_position();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::Black, SearchConfig::depth(3), &mut state).unwrap();
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn start_position_search_is_legal_and_complete() {
    let mut position = Position::new();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::White, SearchConfig::depth(3), &mut state).unwrap();

    assert_eq!(result.depth_reached, 3);
    assert!(result.completed);
    assert!(result.nodes > 0);
    let mv = result.best_move.unwrap();
    assert!(position.is_legal(mv));
    assert_eq!(result.principal_variation.first(), Some(&mv));
    assert_eq!(position, Position::new());
}

#[test]
fn wins_hanging_queen() {
    let mut position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a7"), Color::Black, PieceKind::Queen)
        .piece(sq("i9"), Color::Black, PieceKind::King)
        .build_position();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::White, SearchConfig::depth(3), &mut state).unwrap();
    let mv = result.best_move.unwrap();
    assert_eq!((mv.from(), mv.to()), (sq("a1"), sq("a7")));
}

// ============================================================================
// Extensions and pruning
// ============================================================================

#[test]
fn check_extension_sees_mate_behind_a_check() {
    // Rb8+ drives the king to the back rank, then Ra9 mates. Only visible
    // at depth 2 when checked nodes are extended.
    let mut position = BoardBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("a7"), Color::White, PieceKind::Rook)
        .piece(sq("b1"), Color::White, PieceKind::Rook)
        .piece(sq("i1"), Color::White, PieceKind::King)
        .build_position();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::White, SearchConfig::depth(2), &mut state).unwrap();

    assert_eq!(result.mate_in(), Some(2));
    position.apply(result.best_move.unwrap()).unwrap();
    assert!(position.is_in_check(Color::Black));
}

#[test]
fn reduced_search_still_wins_hanging_queen() {
    let mut position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a7"), Color::Black, PieceKind::Queen)
        .piece(sq("i9"), Color::Black, PieceKind::King)
        .build_position();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::White, SearchConfig::depth(5), &mut state).unwrap();

    assert!(result.completed);
    let mv = result.best_move.unwrap();
    assert_eq!((mv.from(), mv.to()), (sq("a1"), sq("a7")));
}

#[test]
fn null_move_needs_non_pawn_material() {
    let position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e3"), Color::White, PieceKind::Pawn)
        .piece(sq("e9"), Color::Black, PieceKind::King)
        .piece(sq("c9"), Color::Black, PieceKind::Knight)
        .build_position();
    assert!(!position.board().has_non_pawn_material(Color::White));
    assert!(position.board().has_non_pawn_material(Color::Black));
}

#[test]
fn pawn_ending_search_is_legal_and_deterministic() {
    let run = || {
        let mut position = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .moved_piece(sq("d5"), Color::White, PieceKind::Pawn)
            .piece(sq("e9"), Color::Black, PieceKind::King)
            .moved_piece(sq("f5"), Color::Black, PieceKind::Pawn)
            .build_position();
        let mut state = SearchState::new(1);
        let result = search(&mut position, Color::White, SearchConfig::depth(6), &mut state).unwrap();
        assert!(position.is_legal(result.best_move.unwrap()));
        result
    };
    let first = run();
    let second = run();
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.nodes, second.nodes);
}

// ============================================================================
// Determinism and side handling
// ============================================================================

#[test]
fn search_is_deterministic() {
    let run = || {
        let mut position = Position::new();
        let mut state = SearchState::new(1);
        search(&mut position, Color::White, SearchConfig::depth(3), &mut state).unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn searches_for_side_not_to_move_on_a_copy() {
    let mut position = Position::new();
    let mut state = SearchState::new(1);
    let result = search(&mut position, Color::Black, SearchConfig::depth(2), &mut state).unwrap();

    let mv = result.best_move.unwrap();
    assert_eq!(
        position.board().piece_at(mv.from()).map(|p| p.color),
        Some(Color::Black)
    );
    assert_eq!(position, Position::new());
}

#[test]
fn rejects_board_without_king() {
    let mut position = BoardBuilder::new()
        .piece(sq("e9"), Color::Black, PieceKind::King)
        .build_position();
    let mut state = SearchState::new(1);
    assert_eq!(
        search(&mut position, Color::White, SearchConfig::depth(1), &mut state),
        Err(BoardError::MissingKing {
            color: Color::White
        })
    );
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn stop_flag_cuts_search_short() {
    let stop = stop_flag();
    stop.store(true, Ordering::Relaxed);

    let mut position = Position::new();
    let mut state = SearchState::new(1);
    let config = SearchConfig::default().with_stop(stop);
    let result = search(&mut position, Color::White, config, &mut state).unwrap();

    assert!(!result.completed);
    let mv = result.best_move.expect("fallback move");
    assert!(position.is_legal(mv));
    assert_eq!(position, Position::new());
}

#[test]
fn node_limit_is_respected() {
    let mut position = Position::new();
    let mut state = SearchState::new(1);
    let config = SearchConfig::depth(20).with_nodes(1_000);
    let result = search(&mut position, Color::White, config, &mut state).unwrap();

    assert!(!result.completed);
    assert!(result.nodes <= 1_001, "searched {} nodes", result.nodes);
    assert!(result.best_move.is_some());
}

#[test]
fn time_limit_returns_promptly() {
    let mut position = Position::new();
    let mut state = SearchState::new(1);
    let start = std::time::Instant::now();
    let result = search(&mut position, Color::White, SearchConfig::time(100), &mut state).unwrap();

    assert!(start.elapsed().as_millis() < 2_000);
    assert!(result.best_move.is_some());
}

#[test]
fn info_callback_sees_each_iteration() {
    let depths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&depths);
    let config = SearchConfig::depth(3).with_info_callback(Arc::new(move |info: &SearchIterationInfo| {
        sink.lock().unwrap().push(info.depth);
    }));

    let mut position = Position::new();
    let mut state = SearchState::new(1);
    search(&mut position, Color::White, config, &mut state).unwrap();
    assert_eq!(*depths.lock().unwrap(), vec![1, 2, 3]);
}

#[test]
fn transposition_table_fills_during_search() {
    let mut position = Position::new();
    let mut state = SearchState::new(1);
    search(&mut position, Color::White, SearchConfig::depth(3), &mut state).unwrap();
    assert!(state.tables.tt.lookup(position.hash()).is_some());
    assert!(state.stats.total_nodes > 0);

    state.clear();
    assert!(state.tables.tt.lookup(position.hash()).is_none());
}
