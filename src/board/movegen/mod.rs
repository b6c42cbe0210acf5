//! Pseudo-legal move generation.
//!
//! Generation ignores whether the mover's king is left in check; the
//! legality filter handles that. Squares are scanned in row-major order
//! and each piece emits its leaps before its rays, so the output order is
//! deterministic.

mod attacks;
mod kings;
mod pawns;
mod sliders;

use super::{Board, Color, MoveList, Piece, PieceKind, Square};

impl Board {
    /// All pseudo-legal moves for `color`.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces_of(color) {
            self.generate_piece_moves(from, piece, &mut moves);
        }
        moves
    }

    /// Pseudo-legal captures and promotions for `color`.
    #[must_use]
    pub fn capture_moves(&self, color: Color) -> MoveList {
        let mut moves = self.pseudo_legal_moves(color);
        moves.retain(|mv| mv.is_tactical());
        moves
    }

    pub(crate) fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, moves),
            kind => {
                let movement = kind.movement();
                self.generate_leaps(from, piece.color, movement.leaps, moves);
                self.generate_rays(from, piece.color, movement.rays, moves);
                if kind == PieceKind::King {
                    self.generate_castling(from, piece, moves);
                }
            }
        }
    }

    /// Destination count for every non-pawn, non-king piece of each color.
    ///
    /// Counts pseudo-legal destinations, so pins and checks are ignored; this
    /// approximates the legal-move differential. Returns `(white, black)`.
    pub(crate) fn mobility_counts(&self) -> (i32, i32) {
        let mut counts = [0i32; 2];
        let mut scratch = MoveList::new();
        for (from, piece) in self.pieces() {
            if matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
                continue;
            }
            scratch.retain(|_| false);
            let movement = piece.kind.movement();
            self.generate_leaps(from, piece.color, movement.leaps, &mut scratch);
            self.generate_rays(from, piece.color, movement.rays, &mut scratch);
            counts[piece.color.index()] += scratch.len() as i32;
        }
        (counts[0], counts[1])
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }
}
