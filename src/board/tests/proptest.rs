//! Property-based tests using proptest.

use crate::board::{
    evaluate, Board, BoardBuilder, Color, MoveRecord, Piece, PieceKind, Position, Square,
};
use crate::tt::{BoundType, TranspositionTable};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `count` random legal moves, returning the undo records.
fn random_walk(position: &mut Position, rng: &mut StdRng, count: usize) -> Vec<MoveRecord> {
    let mut records = Vec::new();
    for _ in 0..count {
        let moves = position.legal_moves(position.side_to_move());
        if moves.is_empty() || position.is_draw() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        records.push(position.apply(mv).expect("generated move applies"));
    }
    records
}

/// Scatter random pieces around one king per color.
///
/// Sometimes the kings and rooks start unmoved on their home squares so
/// castling shows up. Pawns never stand on either back rank.
fn random_position(rng: &mut StdRng) -> Position {
    let mut builder = BoardBuilder::new();
    let mut taken = Vec::new();

    if rng.gen_bool(0.3) {
        for (name, color, kind) in [
            ("e1", Color::White, PieceKind::King),
            ("e9", Color::Black, PieceKind::King),
            ("a1", Color::White, PieceKind::Rook),
            ("i1", Color::White, PieceKind::Rook),
            ("a9", Color::Black, PieceKind::Rook),
            ("i9", Color::Black, PieceKind::Rook),
        ] {
            if kind == PieceKind::King || rng.gen_bool(0.7) {
                let square: Square = name.parse().expect("valid square");
                builder = builder.piece(square, color, kind);
                taken.push(square.index());
            }
        }
    } else {
        for color in Color::BOTH {
            let idx = loop {
                let idx = rng.gen_range(0..81);
                if !taken.contains(&idx) {
                    break idx;
                }
            };
            builder = builder.place(
                Square::from_index(idx),
                Piece {
                    kind: PieceKind::King,
                    color,
                    has_moved: rng.gen_bool(0.5),
                },
            );
            taken.push(idx);
        }
    }

    let kinds: Vec<PieceKind> = PieceKind::ALL
        .into_iter()
        .filter(|kind| *kind != PieceKind::King)
        .collect();
    for _ in 0..rng.gen_range(0..20) {
        let idx = rng.gen_range(0..81);
        let square = Square::from_index(idx);
        let kind = kinds[rng.gen_range(0..kinds.len())];
        if taken.contains(&idx) || (kind == PieceKind::Pawn && (square.row() == 0 || square.row() == 8)) {
            continue;
        }
        let color = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
        builder = builder.place(
            square,
            Piece {
                kind,
                color,
                has_moved: rng.gen_bool(0.5),
            },
        );
        taken.push(idx);
    }

    let side = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
    builder.side_to_move(side).build_position()
}

proptest! {
    /// Property: on random boards every pseudo-legal move of either color
    /// unapplies to the exact prior position with a consistent hash
    #[test]
    fn prop_random_board_apply_unapply(seed in seed_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = random_position(&mut rng);
        let before = position.clone();

        for color in Color::BOTH {
            for mv in position.board().pseudo_legal_moves(color) {
                let record = position.apply(mv).expect("pseudo-legal move applies");
                prop_assert_eq!(position.hash(), position.board().compute_hash(), "after {}", mv);
                position.unapply(record);
                prop_assert_eq!(&position, &before, "undo of {}", mv);
                prop_assert_eq!(position.hash(), position.board().compute_hash());
            }
        }
    }

    /// Property: apply followed by unapply restores the position exactly
    #[test]
    fn prop_apply_unapply_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = position.clone();

        let mut records = random_walk(&mut position, &mut rng, num_moves);
        while let Some(record) = records.pop() {
            position.unapply(record);
        }

        prop_assert_eq!(position, initial);
    }

    /// Property: the incremental hash always matches a full recomputation
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let records = random_walk(&mut position, &mut rng, 1);
            if records.is_empty() {
                break;
            }
            prop_assert_eq!(position.hash(), position.board().compute_hash());
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..20usize) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_walk(&mut position, &mut rng, num_moves);

        let side = position.side_to_move();
        for mv in position.legal_moves(side) {
            let record = position.apply(mv).expect("legal move applies");
            prop_assert!(!position.is_in_check(side), "{} leaves king in check", mv);
            position.unapply(record);
        }
    }

    /// Property: board text preserves placement and side to move
    #[test]
    fn prop_board_text_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_walk(&mut position, &mut rng, num_moves);

        let side = position.side_to_move();
        let text = position.board().to_text(side);
        let parsed = Board::from_text(&text).expect("own text parses");
        prop_assert_eq!(parsed.to_text(side), text);
        prop_assert_eq!(parsed.side_to_move(), side);
    }

    /// Property: evaluation is antisymmetric up to the tempo bonus
    #[test]
    fn prop_eval_perspective(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_walk(&mut position, &mut rng, num_moves);

        let board = position.board();
        let white = evaluate(board, Color::White);
        let black = evaluate(board, Color::Black);
        prop_assert!((white - black).abs() <= 22, "white {} black {}", white, black);
    }

    /// Property: material balance only changes on captures and promotions
    #[test]
    fn prop_material_changes_on_captures_only(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let before = position.board().material_balance();
            let Some(record) = random_walk(&mut position, &mut rng, 1).pop() else {
                break;
            };
            let after = position.board().material_balance();
            if record.captured_piece().is_none() && !record.mv.is_promotion() {
                prop_assert_eq!(after, before);
            } else {
                prop_assert_ne!(after, before);
            }
        }
    }

    /// Property: a stored entry is returned for its own hash
    #[test]
    fn prop_tt_store_retrieve(hash in any::<u64>(), depth in 0u32..60, score in -20_000i32..20_000) {
        let mut tt = TranspositionTable::new(1);
        tt.store(hash, depth, score, BoundType::Exact, None, 0);
        let entry = tt.lookup(hash).expect("entry stored");
        prop_assert_eq!(entry.score(), score);
        prop_assert_eq!(entry.depth(), depth);
        prop_assert_eq!(entry.bound_type(), BoundType::Exact);
    }
}
