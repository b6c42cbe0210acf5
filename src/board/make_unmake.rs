use super::error::MoveError;
use super::position::{MoveRecord, SpecialMove};
use super::state::EnPassant;
use super::{CastleSide, Move, Piece, PieceKind, Position, Square};

impl Position {
    /// Apply a pseudo-legal move and return the record that undoes it.
    ///
    /// The hash is updated incrementally, the half-move clock resets on
    /// pawn moves and captures, and the new hash is appended to the history.
    /// Fails only when the source square is empty.
    pub fn apply(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        let from = mv.from();
        let to = mv.to();
        let moving = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;

        let halfmove_clock_before = self.halfmove_clock;
        let history_len_before = self.history.len();
        let en_passant_before = self.board.en_passant();
        let hash_before = self.board.hash();

        let board = &mut self.board;
        board.take(from);

        let mut special = None;
        let captured = if mv.is_en_passant() {
            if let Some(captured_square) = board.en_passant_victim(from, to, moving) {
                if let Some(captured) = board.take(captured_square) {
                    special = Some(SpecialMove::EnPassant {
                        captured_square,
                        captured,
                    });
                }
            }
            None
        } else {
            board.take(to)
        };

        if mv.is_castling() {
            let side = if mv.is_castle_kingside() {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            let rook_from = Square::new(from.row(), side.rook_col());
            let rook_to = Square::new(from.row(), side.rook_to_col());
            if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                if let Some(rook) = board.take(rook_from) {
                    board.put(rook_to, Piece::moved(rook.kind, rook.color));
                    special = Some(SpecialMove::Castling {
                        rook_from,
                        rook_to,
                        rook_had_moved: rook.has_moved,
                        rook_kind: rook.kind,
                    });
                }
            }
        }

        let placed_kind = match mv.promotion() {
            Some(promoted_to) => {
                special = Some(SpecialMove::Promotion {
                    promoted_from: moving.kind,
                    promoted_to,
                });
                promoted_to
            }
            None => moving.kind,
        };
        board.put(to, Piece::moved(placed_kind, moving.color));

        let new_ep = if mv.is_double_pawn_push() {
            Square::new((from.row() + to.row()) / 2, from.col())
                .map(|target| EnPassant { target, victim: to })
        } else {
            None
        };
        board.set_en_passant(new_ep);
        board.flip_side();

        let record = MoveRecord {
            mv,
            from,
            to,
            moving,
            captured,
            special,
            halfmove_clock_before,
            history_len_before,
            en_passant_before,
            hash_before,
        };

        if moving.kind == PieceKind::Pawn || record.captured_piece().is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        self.history.push(self.board.hash());

        Ok(record)
    }

    /// Undo a move applied by [`Position::apply`].
    ///
    /// Records must be undone in reverse order of application.
    pub fn unapply(&mut self, record: MoveRecord) {
        let board = &mut self.board;
        board.take(record.to);

        match record.special {
            Some(SpecialMove::Castling {
                rook_from,
                rook_to,
                rook_had_moved,
                rook_kind,
            }) => {
                board.take(rook_to);
                board.put(
                    rook_from,
                    Piece {
                        kind: rook_kind,
                        color: record.moving.color,
                        has_moved: rook_had_moved,
                    },
                );
            }
            Some(SpecialMove::EnPassant {
                captured_square,
                captured,
            }) => board.put(captured_square, captured),
            Some(SpecialMove::Promotion { .. }) | None => {}
        }

        if let Some(captured) = record.captured {
            board.put(record.to, captured);
        }
        board.put(record.from, record.moving);
        board.set_en_passant(record.en_passant_before);
        board.flip_side();
        debug_assert_eq!(board.hash(), record.hash_before);

        self.halfmove_clock = record.halfmove_clock_before;
        self.history.truncate(record.history_len_before);
    }

    /// Pass the turn without moving, for null-move pruning.
    ///
    /// Clears en passant and flips the side to move. The history is left
    /// alone so a null move never counts toward repetition.
    pub(crate) fn apply_null(&mut self) -> NullMoveRecord {
        let record = NullMoveRecord {
            en_passant_before: self.board.en_passant(),
            halfmove_clock_before: self.halfmove_clock,
        };
        self.board.set_en_passant(None);
        self.board.flip_side();
        self.halfmove_clock += 1;
        record
    }

    /// Undo [`Position::apply_null`].
    pub(crate) fn unapply_null(&mut self, record: NullMoveRecord) {
        self.board.flip_side();
        self.board.set_en_passant(record.en_passant_before);
        self.halfmove_clock = record.halfmove_clock_before;
    }
}

/// Undo token for [`Position::apply_null`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NullMoveRecord {
    en_passant_before: Option<EnPassant>,
    halfmove_clock_before: u32,
}
