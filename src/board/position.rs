//! A board together with the history that decides draws.

use super::error::MoveError;
use super::state::EnPassant;
use super::{Board, Color, Move, Piece, PieceKind, Square, DEFAULT_PROMOTION};

/// Ordered list of position hashes, one per position reached.
///
/// The first entry is the starting position; each applied move appends the
/// hash of the resulting position and each undo truncates it again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionHistory {
    hashes: Vec<u64>,
}

impl PositionHistory {
    #[must_use]
    pub fn new() -> Self {
        PositionHistory { hashes: Vec::new() }
    }

    pub fn push(&mut self, hash: u64) {
        self.hashes.push(hash);
    }

    pub fn truncate(&mut self, len: usize) {
        self.hashes.truncate(len);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// How many times `hash` occurs.
    #[must_use]
    pub fn count(&self, hash: u64) -> usize {
        self.hashes.iter().filter(|&&h| h == hash).count()
    }

    #[must_use]
    pub fn last(&self) -> Option<u64> {
        self.hashes.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.hashes.iter()
    }

    fn replace_last(&mut self, hash: u64) {
        match self.hashes.last_mut() {
            Some(last) => *last = hash,
            None => self.hashes.push(hash),
        }
    }
}

/// Side effect of a special move, kept so it can be undone exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialMove {
    Castling {
        rook_from: Square,
        rook_to: Square,
        rook_had_moved: bool,
        rook_kind: PieceKind,
    },
    EnPassant {
        /// Square the captured pawn stood on (not the destination)
        captured_square: Square,
        captured: Piece,
    },
    Promotion {
        promoted_from: PieceKind,
        promoted_to: PieceKind,
    },
}

/// Undo token returned by [`Position::apply`].
///
/// Holds everything needed to restore the prior position bit for bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    pub from: Square,
    pub to: Square,
    /// The moving piece as it was before the move
    pub moving: Piece,
    /// Piece that stood on the destination square
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
    pub halfmove_clock_before: u32,
    pub history_len_before: usize,
    pub en_passant_before: Option<EnPassant>,
    pub hash_before: u64,
}

impl MoveRecord {
    /// The piece removed from the board by this move, if any.
    #[must_use]
    pub fn captured_piece(&self) -> Option<Piece> {
        match self.special {
            Some(SpecialMove::EnPassant { captured, .. }) => Some(captured),
            _ => self.captured,
        }
    }
}

/// Board, position history and half-move clock.
///
/// Together these fully determine future legal moves and draw claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) history: PositionHistory,
    pub(crate) halfmove_clock: u32,
}

impl Position {
    /// The classic starting position.
    #[must_use]
    pub fn new() -> Self {
        Position::from_board(Board::new())
    }

    /// Start a game from an arbitrary board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut history = PositionHistory::new();
        history.push(board.hash());
        Position {
            board,
            history,
            halfmove_clock: 0,
        }
    }

    /// Restore a position from its parts, e.g. after deserializing a saved game.
    ///
    /// An empty history is seeded with the board's hash.
    #[must_use]
    pub fn from_parts(board: Board, mut history: PositionHistory, halfmove_clock: u32) -> Self {
        if history.last() != Some(board.hash()) {
            history.push(board.hash());
        }
        Position {
            board,
            history,
            halfmove_clock,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Number of moves applied since the history began.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Hand the move to `color`, keeping the history entry for the
    /// current position in sync with the new hash.
    pub fn set_side_to_move(&mut self, color: Color) {
        if self.board.side_to_move() != color {
            self.board.set_side_to_move(color);
            self.history.replace_last(self.board.hash());
        }
    }

    /// Apply the legal move `from -> to` for the side to move.
    ///
    /// Promotions without an explicit choice promote to the Angel.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        let side = self.side_to_move();
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        if piece.color != side {
            return Err(MoveError::WrongSide { square: from, side });
        }
        if let Some(kind) = promotion {
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotion { kind });
            }
        }

        let wanted = promotion.unwrap_or(DEFAULT_PROMOTION);
        let mv = self
            .legal_moves(side)
            .into_iter()
            .filter(|mv| mv.from() == from && mv.to() == to)
            .find(|mv| match mv.promotion() {
                Some(kind) => kind == wanted,
                None => promotion.is_none(),
            })
            .ok_or(MoveError::Illegal { from, to })?;

        self.apply(mv)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
