use super::super::{Board, CastleSide, Move, MoveList, Piece, PieceKind, Square, KING_HOME_COL};

impl Board {
    /// Castling candidates for an unmoved king on its home column.
    ///
    /// Only occupancy and `has_moved` flags are checked here; attacked
    /// squares are rejected by the legality filter.
    pub(crate) fn generate_castling(&self, from: Square, king: Piece, moves: &mut MoveList) {
        if king.has_moved || from.col() != KING_HOME_COL {
            return;
        }
        let row = from.row();
        for side in CastleSide::BOTH {
            if !self.can_castle(row, king, side) {
                continue;
            }
            let Some(to) = Square::new(row, side.king_to_col()) else {
                continue;
            };
            moves.push(match side {
                CastleSide::Kingside => Move::castle_kingside(from, to),
                CastleSide::Queenside => Move::castle_queenside(from, to),
            });
        }
    }

    fn can_castle(&self, row: usize, king: Piece, side: CastleSide) -> bool {
        let rook_ready = Square::new(row, side.rook_col())
            .and_then(|sq| self.piece_at(sq))
            .is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
            });
        rook_ready
            && side
                .between_cols()
                .filter_map(|col| Square::new(row, col))
                .all(|sq| self.is_empty(sq))
    }
}
