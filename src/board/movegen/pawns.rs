use super::super::{Board, Move, MoveList, Piece, PieceKind, Square, PROMOTION_KINDS};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece, moves: &mut MoveList) {
        let color = pawn.color;
        let dir = color.pawn_direction();
        let promotion_row = color.promotion_row();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(from, one, false, promotion_row, moves);

                if !pawn.has_moved && from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::double_pawn_push(from, two));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(to) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != color => {
                    push_pawn_move(from, to, true, promotion_row, moves);
                }
                Some(_) => {}
                None => {
                    if self.en_passant_victim(from, to, pawn).is_some() {
                        moves.push(Move::en_passant(from, to));
                    }
                }
            }
        }
    }

    /// Square of the pawn captured by an en passant move `from -> to`.
    ///
    /// The victim stands beside the capturing pawn on its original row, in
    /// the destination column.
    pub(crate) fn en_passant_victim(
        &self,
        from: Square,
        to: Square,
        pawn: Piece,
    ) -> Option<Square> {
        let ep = self.en_passant?;
        if ep.target != to || ep.victim.row() != from.row() || ep.victim.col() != to.col() {
            return None;
        }
        match self.piece_at(ep.victim) {
            Some(victim) if victim.color != pawn.color && victim.kind == PieceKind::Pawn => {
                Some(ep.victim)
            }
            _ => None,
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    capture: bool,
    promotion_row: usize,
    moves: &mut MoveList,
) {
    if to.row() == promotion_row {
        for kind in PROMOTION_KINDS {
            moves.push(Move::new_promotion(from, to, kind, capture));
        }
    } else if capture {
        moves.push(Move::capture(from, to));
    } else {
        moves.push(Move::quiet(from, to));
    }
}
