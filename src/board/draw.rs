//! Draw rules: fifty-move, threefold repetition and insufficient material.

use std::fmt;

use super::{Board, Color, PieceKind, Position};

/// Half-move clock value at which the fifty-move rule applies.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Occurrences of one position that make a repetition draw.
pub const REPETITION_LIMIT: usize = 3;

/// Why a position is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

impl Position {
    /// The first draw rule that applies, checked in the order fifty-move,
    /// repetition, material.
    #[must_use]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.board.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
    }

    /// The current position has occurred at least three times.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.history.count(self.board.hash()) >= REPETITION_LIMIT
    }

    /// The current position occurred before (used inside search).
    #[must_use]
    pub(crate) fn is_repetition(&self) -> bool {
        self.history.count(self.board.hash()) > 1
    }
}

impl Board {
    /// Neither side can possibly deliver mate.
    ///
    /// Drawn: bare kings; a single knight or bishop; two knights against a
    /// bare king; any set of bishops that all stand on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut counts = [[0usize; 2]; 2]; // [color][0 = knights, 1 = bishops]
        let mut bishop_colors = [false; 2]; // [dark seen, light seen]

        for (sq, piece) in self.pieces() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight => counts[piece.color.index()][0] += 1,
                PieceKind::Bishop => {
                    counts[piece.color.index()][1] += 1;
                    bishop_colors[usize::from(sq.is_light())] = true;
                }
                _ => return false,
            }
        }

        let knights = counts[0][0] + counts[1][0];
        let bishops = counts[0][1] + counts[1][1];
        if knights + bishops <= 1 {
            return true;
        }

        let side_total = |c: Color| counts[c.index()][0] + counts[c.index()][1];
        let two_knights_alone = Color::BOTH.iter().any(|&c| {
            counts[c.index()][0] == 2
                && counts[c.index()][1] == 0
                && side_total(c.opponent()) == 0
        });
        if two_knights_alone {
            return true;
        }

        knights == 0 && !(bishop_colors[0] && bishop_colors[1])
    }
}
