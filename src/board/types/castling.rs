//! Castling geometry.
//!
//! The king starts on the center column and castles two squares toward a
//! corner rook; the rook lands on the square the king passed over.

use super::square::BOARD_SIZE;

/// Column the king must stand on to castle.
pub(crate) const KING_HOME_COL: usize = BOARD_SIZE / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub(crate) const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column of the rook that castles on this side
    #[inline]
    pub(crate) const fn rook_col(self) -> usize {
        match self {
            CastleSide::Kingside => BOARD_SIZE - 1,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the king lands on
    #[inline]
    pub(crate) const fn king_to_col(self) -> usize {
        match self {
            CastleSide::Kingside => KING_HOME_COL + 2,
            CastleSide::Queenside => KING_HOME_COL - 2,
        }
    }

    /// Column the rook lands on
    #[inline]
    pub(crate) const fn rook_to_col(self) -> usize {
        match self {
            CastleSide::Kingside => KING_HOME_COL + 1,
            CastleSide::Queenside => KING_HOME_COL - 1,
        }
    }

    /// Columns strictly between king and rook, all of which must be empty
    pub(crate) fn between_cols(self) -> std::ops::Range<usize> {
        match self {
            CastleSide::Kingside => KING_HOME_COL + 1..BOARD_SIZE - 1,
            CastleSide::Queenside => 1..KING_HOME_COL,
        }
    }
}
