use super::super::{Board, Color, PieceKind, Square, KING_OFFSETS, KNIGHT_OFFSETS};

impl Board {
    /// True if any piece of `by` attacks `square`.
    ///
    /// Works backwards from the target with the same movement patterns the
    /// generator uses. Every pattern is symmetric, so a piece found one
    /// step (or one ray) away along a direction attacks the target exactly
    /// when its own pattern contains that direction.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // Pawns attack diagonally forward, so look one row behind the target.
        let back = -by.pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = square.offset(back, dc) {
                if self
                    .piece_at(sq)
                    .is_some_and(|p| p.color == by && p.kind == PieceKind::Pawn)
                {
                    return true;
                }
            }
        }

        for &(dr, dc) in KNIGHT_OFFSETS.iter().chain(KING_OFFSETS.iter()) {
            let Some(sq) = square.offset(dr, dc) else {
                continue;
            };
            if let Some(p) = self.piece_at(sq) {
                if p.color == by && p.kind.movement().leaps.contains(&(-dr, -dc)) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &KING_OFFSETS {
            let mut current = square;
            while let Some(sq) = current.offset(dr, dc) {
                if let Some(p) = self.piece_at(sq) {
                    if p.color == by && p.kind.movement().rays.contains(&(-dr, -dc)) {
                        return true;
                    }
                    break;
                }
                current = sq;
            }
        }

        false
    }

    /// True if `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
