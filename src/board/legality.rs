//! Legal move filtering and check/mate/stalemate detection.

use super::{CastleSide, Color, Move, MoveList, PieceKind, Position, Square};

impl Position {
    /// All legal moves for `color`, in generation order.
    ///
    /// A move is legal when it does not leave `color`'s king attacked.
    /// Castling additionally needs the king out of check and the squares it
    /// crosses and lands on unattacked. Capturing a king is never legal.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut moves = self.board.pseudo_legal_moves(color);
        moves.retain(|mv| self.is_legal_pseudo(mv, color));
        moves
    }

    /// Legal captures and promotions for `color`.
    pub fn legal_captures(&mut self, color: Color) -> MoveList {
        let mut moves = self.board.capture_moves(color);
        moves.retain(|mv| self.is_legal_pseudo(mv, color));
        moves
    }

    /// True if `mv` is a legal move for the owner of the piece on its source square.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        let Some(piece) = self.board.piece_at(mv.from()) else {
            return false;
        };
        self.board.pseudo_legal_moves(piece.color).contains(mv)
            && self.is_legal_pseudo(mv, piece.color)
    }

    /// True if `color` has at least one legal move.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let moves = self.board.pseudo_legal_moves(color);
        moves.iter().any(|&mv| self.is_legal_pseudo(mv, color))
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.board.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.board.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Legality of a move already known to be pseudo-legal for `color`.
    pub(crate) fn is_legal_pseudo(&mut self, mv: Move, color: Color) -> bool {
        if self
            .board
            .piece_at(mv.to())
            .is_some_and(|p| p.kind == PieceKind::King)
        {
            return false;
        }
        if mv.is_castling() && !self.castling_path_safe(mv, color) {
            return false;
        }

        let Ok(record) = self.apply(mv) else {
            return false;
        };
        let safe = !self.board.is_in_check(color);
        self.unapply(record);
        safe
    }

    fn castling_path_safe(&self, mv: Move, color: Color) -> bool {
        let enemy = color.opponent();
        if self.board.is_square_attacked(mv.from(), enemy) {
            return false;
        }
        let side = if mv.is_castle_kingside() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        let row = mv.from().row();
        let (lo, hi) = {
            let a = mv.from().col();
            let b = side.king_to_col();
            (a.min(b), a.max(b))
        };
        (lo..=hi)
            .filter(|&col| col != mv.from().col())
            .filter_map(|col| Square::new(row, col))
            .all(|sq| !self.board.is_square_attacked(sq, enemy))
    }
}
