//! Zobrist hashing for 9x9 positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for repetition
//! detection and the transposition table. Besides piece placement the hash
//! covers the side to move, the en passant file and whether each king,
//! rook and pawn is still unmoved, since all three change the set of legal
//! moves.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, PieceKind, Square, BOARD_SIZE, NUM_SQUARES};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][color][square]
    pub(crate) piece_keys: [[[u64; NUM_SQUARES]; 2]; 9],
    // xor'ed in for unmoved kings, rooks and pawns
    pub(crate) unmoved_keys: [u64; NUM_SQUARES],
    pub(crate) black_to_move_key: u64,
    // en_passant_keys[col]
    pub(crate) en_passant_keys: [u64; BOARD_SIZE],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; NUM_SQUARES]; 2]; 9];
        let mut unmoved_keys = [0; NUM_SQUARES];
        let mut en_passant_keys = [0; BOARD_SIZE];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        for key in &mut unmoved_keys {
            *key = rng.gen();
        }
        let black_to_move_key = rng.gen();
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            unmoved_keys,
            black_to_move_key,
            en_passant_keys,
        }
    }

    /// Key contribution of `piece` standing on `sq`.
    #[inline]
    pub(crate) fn piece(&self, piece: Piece, sq: Square) -> u64 {
        let key = self.piece_keys[piece.kind.index()][piece.color.index()][sq.index()];
        if piece.has_moved || !tracks_moved(piece.kind) {
            key
        } else {
            key ^ self.unmoved_keys[sq.index()]
        }
    }

    #[inline]
    pub(crate) fn side(&self, color: Color) -> u64 {
        match color {
            Color::White => 0,
            Color::Black => self.black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn en_passant(&self, target: Square) -> u64 {
        self.en_passant_keys[target.col()]
    }
}

/// Kinds whose move set depends on `has_moved` (castling, double push).
#[inline]
const fn tracks_moved(kind: PieceKind) -> bool {
    matches!(kind, PieceKind::King | PieceKind::Rook | PieceKind::Pawn)
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
