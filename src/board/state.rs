use crate::zobrist::ZOBRIST;

use super::error::BoardError;
use super::{Color, Piece, PieceKind, Square, BOARD_SIZE, NUM_SQUARES};

/// En passant state left behind by a two-square pawn advance.
///
/// Lives for exactly one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnPassant {
    /// Square the pawn passed over; the capturing pawn lands here
    pub target: Square,
    /// Square of the pawn that may be captured
    pub victim: Square,
}

/// Piece placement plus the state that decides which moves are available:
/// side to move and en passant target. The board owns no move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; NUM_SQUARES],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) hash: u64,
}

/// Back row from column 0 to 8.
const CLASSIC_BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Archbishop,
    PieceKind::King,
    PieceKind::Chancellor,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The classic starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in CLASSIC_BACK_ROW.iter().enumerate() {
            for color in Color::BOTH {
                let back = Square::from_index(color.back_row() * BOARD_SIZE + col);
                let pawn = Square::from_index(color.pawn_start_row() * BOARD_SIZE + col);
                board.put(back, Piece::new(*kind, color));
                board.put(pawn, Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Same as [`Board::new`].
    #[must_use]
    pub fn classic() -> Self {
        Board::new()
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; NUM_SQUARES],
            side_to_move: Color::White,
            en_passant: None,
            hash: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Replace the contents of a square (setup helper).
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.take(sq);
        if let Some(piece) = piece {
            self.put(sq, piece);
        }
    }

    /// Change the side to move, clearing any en passant target.
    pub fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move != color {
            self.set_en_passant(None);
            self.hash ^= ZOBRIST.black_to_move_key;
            self.side_to_move = color;
        }
    }

    /// Place a piece on an empty square, updating the hash.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.squares[sq.index()].is_none());
        self.hash ^= ZOBRIST.piece(piece, sq);
        self.squares[sq.index()] = Some(piece);
    }

    /// Remove whatever stands on `sq`, updating the hash.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take();
        if let Some(piece) = piece {
            self.hash ^= ZOBRIST.piece(piece, sq);
        }
        piece
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, ep: Option<EnPassant>) {
        if let Some(old) = self.en_passant {
            self.hash ^= ZOBRIST.en_passant(old.target);
        }
        if let Some(new) = ep {
            self.hash ^= ZOBRIST.en_passant(new.target);
        }
        self.en_passant = ep;
    }

    #[inline]
    pub(crate) fn flip_side(&mut self) {
        self.hash ^= ZOBRIST.black_to_move_key;
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Recompute the hash from scratch.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = ZOBRIST.side(self.side_to_move);
        for (sq, piece) in self.pieces() {
            hash ^= ZOBRIST.piece(piece, sq);
        }
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.en_passant(ep.target);
        }
        hash
    }

    /// Iterate occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|piece| (Square::from_index(idx), piece)))
    }

    /// Iterate the pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// True when `color` owns anything besides pawns and its king.
    #[must_use]
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(_, p)| p.kind.phase_weight() > 0)
    }

    /// First king of `color` in scan order.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Check that each color has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::BOTH {
            let count = self
                .pieces_of(color)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            match count {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                _ => return Err(BoardError::MultipleKings { color, count }),
            }
        }
        Ok(())
    }

    /// Material balance (White minus Black) excluding kings.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.pieces()
            .filter(|(_, p)| p.kind != PieceKind::King)
            .map(|(_, p)| p.color.sign() * p.kind.value())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
