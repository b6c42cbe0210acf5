//! Piece-square tables.
//!
//! Tables are laid out row-major from White's point of view (row 0 is the
//! far rank White promotes on). Black reads them mirrored by row.

use super::{Color, PieceKind, Square, NUM_SQUARES};

type Table = [i32; NUM_SQUARES];

#[rustfmt::skip]
const PAWN: Table = [
     0,  0,  0,   0,   0,   0,   0,  0,  0,
    50, 50, 50,  50,  50,  50,  50, 50, 50,
    10, 10, 20,  30,  30,  30,  20, 10, 10,
     5,  5, 10,  25,  25,  25,  10,  5,  5,
     0,  0,  0,  20,  25,  20,   0,  0,  0,
     5, -5,-10,   0,  10,   0, -10, -5,  5,
     5, 10, 10, -20, -20, -20,  10, 10,  5,
     0,  0,  0,   0,   0,   0,   0,  0,  0,
     0,  0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT: Table = [
    -50,-40,-30,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 25, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 15, 10,  0,-30,
    -40,-20,  0,  5,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP: Table = [
    -20,-10,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 15, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  0,  5,-10,
    -10,  0,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  5,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN: Table = [
    -20,-10,-10, -5, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  5,  0,  0,
     -5, -5,  0,  5,  5,  5,  5,  5,  0,
     -5,-10,  0,  5,  5,  5,  5,  5,  0,
    -10,-10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MG: Table = [
    -30,-40,-40,-50,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-50,-40,-40,-30,
    -30,-40,-50,-50,-50,-40,-40,-30,-30,
    -20,-30,-30,-40,-40,-40,-30,-30,-20,
     20, 20,  0,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0,  0, 10, 30, 20,
     20, 30, 10,  0,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_EG: Table = [
    -50,-40,-30,-20,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,  0,-10,-20,-30,
    -30,-10, 10, 20, 20, 20, 10,-10,-30,
    -30,  0, 20, 30, 30, 30, 20,  0,-30,
    -30,  0, 20, 30, 40, 30, 20,  0,-30,
    -30,  0, 20, 30, 30, 30, 20,  0,-30,
    -30,-10, 10, 20, 20, 20, 10,-10,-30,
    -20,-10,  0,  0,  0,  0,  0,-10,-20,
    -50,-40,-30,-20,-20,-20,-30,-40,-50,
];

/// Middlegame and endgame table values for a piece on `sq`.
///
/// Compound pieces borrow the table of their stronger part: the
/// Archbishop uses the knight table, the Chancellor and Angel the queen's.
#[inline]
pub(crate) fn pst_values(kind: PieceKind, color: Color, sq: Square) -> (i32, i32) {
    let idx = match color {
        Color::White => sq.index(),
        Color::Black => sq.flip_vertical().index(),
    };
    match kind {
        PieceKind::Pawn => (PAWN[idx], PAWN[idx]),
        PieceKind::Knight | PieceKind::Archbishop => (KNIGHT[idx], KNIGHT[idx]),
        PieceKind::Bishop => (BISHOP[idx], BISHOP[idx]),
        PieceKind::Rook => (ROOK[idx], ROOK[idx]),
        PieceKind::Queen | PieceKind::Chancellor | PieceKind::Angel => (QUEEN[idx], QUEEN[idx]),
        PieceKind::King => (KING_MG[idx], KING_EG[idx]),
    }
}
