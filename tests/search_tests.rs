//! End-to-end checks through the public API: playing moves, evaluating,
//! searching and asking the advisor.

use std::sync::Arc;

use chess9_engine::board::{
    evaluate, search_timed, BoardBuilder, Color, DrawReason, PieceKind, Position, Square,
};
use chess9_engine::{Advice, Advisor, AdvisorConfig, BookMove, BookPosition, OpeningBook};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Test that a short game can be played and undone through the boundary API
#[test]
fn play_and_undo_opening() {
    let mut position = Position::new();
    let mut records = Vec::new();
    for (from, to) in [("e2", "e4"), ("e8", "e6"), ("h1", "g3"), ("h9", "g7")] {
        records.push(position.apply_move(sq(from), sq(to), None).unwrap());
    }
    assert_eq!(position.side_to_move(), Color::White);
    assert_eq!(position.ply(), 4);

    while let Some(record) = records.pop() {
        position.unapply(record);
    }
    assert_eq!(position, Position::new());
}

/// Test that evaluation is balanced at the start and favors extra material
#[test]
fn evaluation_tracks_material() {
    let position = Position::new();
    let white = evaluate(position.board(), Color::White);
    let black = evaluate(position.board(), Color::Black);
    assert_eq!(white, -black);

    let up_a_rook = BoardBuilder::starting_position().clear(sq("a9")).build();
    assert!(evaluate(&up_a_rook, Color::White) > 300);
}

/// Test that the engine takes a free piece
#[test]
fn timed_search_captures_hanging_angel() {
    let mut position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d4"), Color::White, PieceKind::Knight)
        .piece(sq("e6"), Color::Black, PieceKind::Angel)
        .piece(sq("i9"), Color::Black, PieceKind::King)
        .build_position();
    let result = search_timed(&mut position, Color::White, 500).unwrap();
    let mv = result.best_move.unwrap();
    assert_eq!((mv.from(), mv.to()), (sq("d4"), sq("e6")));
}

/// Test that the engine does not hand over its queen
#[test]
fn timed_search_avoids_hanging_queen() {
    let mut position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d1"), Color::White, PieceKind::Queen)
        .moved_piece(sq("c6"), Color::Black, PieceKind::Pawn)
        .piece(sq("e9"), Color::Black, PieceKind::King)
        .build_position();
    let result = search_timed(&mut position, Color::White, 500).unwrap();
    let mv = result.best_move.unwrap();
    // d5 is covered by the c6 pawn
    assert_ne!(mv.to(), sq("d5"));
}

/// Test that draws are reported through the position
#[test]
fn draw_by_insufficient_material() {
    let position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("c3"), Color::White, PieceKind::Bishop)
        .piece(sq("e9"), Color::Black, PieceKind::King)
        .build_position();
    assert_eq!(position.draw_reason(), Some(DrawReason::InsufficientMaterial));
}

/// Test that the advisor answers from the book and then searches
#[test]
fn advisor_uses_book_then_search() {
    let mut book = OpeningBook::new();
    let start = Position::new();
    book.insert(
        OpeningBook::key(start.board(), Color::White),
        BookPosition {
            moves: vec![BookMove::new(sq("d2"), sq("d4"))],
            seen_count: 1,
        },
    );

    let config = AdvisorConfig {
        tt_mb: 1,
        seed: Some(1),
        ..AdvisorConfig::default()
    };
    let mut advisor = Advisor::new(config).with_book(Arc::new(book));

    let mut position = Position::new();
    let advice = advisor.best_move(&mut position, Color::White, 100).unwrap();
    let Advice::Book(mv) = advice else {
        panic!("expected a book move, got {advice:?}");
    };
    position.apply(mv).unwrap();

    let advice = advisor.best_move(&mut position, Color::Black, 100).unwrap();
    assert!(!advice.is_book());
    let mv = advice.best_move().unwrap();
    assert!(position.is_legal(mv));
}
