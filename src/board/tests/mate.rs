//! Forced mate solver tests.

use super::sq;
use crate::board::{find_forced_mate, BoardBuilder, BoardError, Color, PieceKind, Position};

/// Black king in the corner, White queen and king close by.
fn queen_edge_mate() -> Position {
    BoardBuilder::new()
        .piece(sq("a9"), Color::Black, PieceKind::King)
        .piece(sq("c7"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::White, PieceKind::Queen)
        .build_position()
}

/// Two rooks: one move to build the ladder, one to mate.
fn rook_ladder() -> Position {
    BoardBuilder::new()
        .piece(sq("e9"), Color::Black, PieceKind::King)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .moved_piece(sq("a6"), Color::White, PieceKind::Rook)
        .moved_piece(sq("b5"), Color::White, PieceKind::Rook)
        .build_position()
}

fn assert_line_mates(position: &Position, line: &[crate::board::Move]) {
    let mut position = position.clone();
    for &mv in line {
        position.apply(mv).unwrap();
    }
    assert!(position.is_checkmate(Color::Black));
}

#[test]
fn finds_edge_mate_in_one() {
    let mut position = queen_edge_mate();
    let line = find_forced_mate(&mut position, Color::White, 1)
        .unwrap()
        .expect("mate in one");
    assert_eq!(line.len(), 1);
    assert_line_mates(&position, &line);
    assert_eq!(position, queen_edge_mate());
}

#[test]
fn finds_mate_in_two() {
    let mut position = rook_ladder();
    assert_eq!(find_forced_mate(&mut position, Color::White, 1).unwrap(), None);

    let line = find_forced_mate(&mut position, Color::White, 3)
        .unwrap()
        .expect("mate in two");
    assert_eq!(line.len(), 3);
    assert_line_mates(&position, &line);
}

#[test]
fn prefers_shortest_mate() {
    let mut position = queen_edge_mate();
    let line = find_forced_mate(&mut position, Color::White, 5)
        .unwrap()
        .expect("mate");
    assert_eq!(line.len(), 1);
}

#[test]
fn no_mate_with_bare_rook_far_away() {
    let mut position = BoardBuilder::new()
        .piece(sq("e5"), Color::Black, PieceKind::King)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .build_position();
    assert_eq!(find_forced_mate(&mut position, Color::White, 3).unwrap(), None);
}

#[test]
fn solves_for_side_not_to_move_on_a_copy() {
    let mut position = queen_edge_mate();
    position.set_side_to_move(Color::Black);
    let before = position.clone();

    let line = find_forced_mate(&mut position, Color::White, 1).unwrap();
    assert_eq!(line.map(|l| l.len()), Some(1));
    assert_eq!(position, before);
}

#[test]
fn rejects_malformed_board() {
    let mut position = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .build_position();
    assert_eq!(
        find_forced_mate(&mut position, Color::White, 1),
        Err(BoardError::MissingKing {
            color: Color::Black
        })
    );
}
