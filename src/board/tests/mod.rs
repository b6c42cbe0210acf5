//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Apply/unapply correctness and move errors
//! - `edge_cases.rs` - Compound pieces, castling, check and board text
//! - `mate.rs` - Forced mate solver
//! - `search.rs` - Iterative deepening search
//! - `search_tables.rs` - Killer and history tables
//! - `proptest.rs` - Property-based tests

mod mate;
mod proptest;
mod search;
mod search_tables;

use crate::board::{Move, PieceKind, Position, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// The legal move `from -> to` for the side to move.
pub(super) fn find_move(position: &mut Position, from: &str, to: &str) -> Move {
    let (from, to) = (sq(from), sq(to));
    position
        .legal_moves(position.side_to_move())
        .into_iter()
        .find(|m| m.from() == from && m.to() == to)
        .unwrap_or_else(|| panic!("expected legal move {from}{to}"))
}

/// Play coordinate moves such as `e2e4` or `a8a9n`.
pub(super) fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let promotion = text[4..].chars().next().and_then(PieceKind::from_char);
        position
            .apply_move(sq(&text[0..2]), sq(&text[2..4]), promotion)
            .unwrap_or_else(|e| panic!("{text}: {e}"));
    }
}
