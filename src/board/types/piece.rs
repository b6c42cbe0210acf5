//! Piece kinds, colors and movement patterns.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::BOARD_SIZE;

/// Piece kinds, including the compound pieces of the 9x9 variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    /// Bishop + Knight
    Archbishop,
    /// Rook + Knight
    Chancellor,
    /// Queen + Knight, reachable only through promotion
    Angel,
}

/// Step offsets as (row delta, col delta).
pub(crate) type Offset = (i8, i8);

pub(crate) const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const DIAGONAL_RAYS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONAL_RAYS: [Offset; 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
pub(crate) const ALL_RAYS: [Offset; 8] = KING_OFFSETS;

/// How a piece kind moves: single steps and unbounded rays.
///
/// Pawns are special-cased by the move generator and report no pattern.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Movement {
    pub leaps: &'static [Offset],
    pub rays: &'static [Offset],
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 9] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Archbishop,
        PieceKind::Chancellor,
        PieceKind::Angel,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Movement pattern for this kind.
    ///
    /// This is the single place where compound geometry is defined; the
    /// Angel is treated as Queen + Knight.
    #[inline]
    #[must_use]
    pub(crate) const fn movement(self) -> Movement {
        match self {
            PieceKind::Pawn => Movement {
                leaps: &[],
                rays: &[],
            },
            PieceKind::Knight => Movement {
                leaps: &KNIGHT_OFFSETS,
                rays: &[],
            },
            PieceKind::Bishop => Movement {
                leaps: &[],
                rays: &DIAGONAL_RAYS,
            },
            PieceKind::Rook => Movement {
                leaps: &[],
                rays: &ORTHOGONAL_RAYS,
            },
            PieceKind::Queen => Movement {
                leaps: &[],
                rays: &ALL_RAYS,
            },
            PieceKind::King => Movement {
                leaps: &KING_OFFSETS,
                rays: &[],
            },
            PieceKind::Archbishop => Movement {
                leaps: &KNIGHT_OFFSETS,
                rays: &DIAGONAL_RAYS,
            },
            PieceKind::Chancellor => Movement {
                leaps: &KNIGHT_OFFSETS,
                rays: &ORTHOGONAL_RAYS,
            },
            PieceKind::Angel => Movement {
                leaps: &KNIGHT_OFFSETS,
                rays: &ALL_RAYS,
            },
        }
    }

    /// Parse a piece kind from its lowercase letter (`e` is the Angel)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            'a' => Some(PieceKind::Archbishop),
            'c' => Some(PieceKind::Chancellor),
            'e' => Some(PieceKind::Angel),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Archbishop => 'a',
            PieceKind::Chancellor => 'c',
            PieceKind::Angel => 'e',
        }
    }

    /// Material value in centipawns.
    ///
    /// Compound pieces sit between their components and the next tier:
    /// Archbishop 600, Chancellor 700, Angel 1000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
            PieceKind::Archbishop => 600,
            PieceKind::Chancellor => 700,
            PieceKind::Angel => 1000,
        }
    }

    /// Contribution to the game phase used for tapered evaluation.
    #[inline]
    #[must_use]
    pub(crate) const fn phase_weight(self) -> i32 {
        match self {
            PieceKind::Pawn | PieceKind::King => 0,
            PieceKind::Knight | PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Archbishop | PieceKind::Chancellor => 3,
            PieceKind::Queen | PieceKind::Angel => 4,
        }
    }

    /// True for kinds a pawn may promote to.
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }
}

/// Promotion choices in generation order (Angel is the default).
pub(crate) const PROMOTION_KINDS: [PieceKind; 7] = [
    PieceKind::Angel,
    PieceKind::Queen,
    PieceKind::Chancellor,
    PieceKind::Archbishop,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Promotion used when the caller does not choose one.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Angel;

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row delta of a pawn step (White moves toward row 0)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns start on
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => BOARD_SIZE - 2,
            Color::Black => 1,
        }
    }

    /// Row on which pawns promote
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Home row of the king and rooks
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }

    /// Single-character tag used in board text (`w` / `b`)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board.
///
/// `has_moved` decides castling eligibility and the pawn double step.
/// Only board text parsing infers it from placement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// An unmoved piece
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// A piece that has already moved
    #[inline]
    #[must_use]
    pub const fn moved(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: true,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.to_char(), self.kind.to_char())
    }
}
