//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing board text.
//!
//! # Example
//! ```
//! use chess9_engine::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(8, 4).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(0, 4).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(1, 0).unwrap(), Color::White, PieceKind::Angel)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(board.validate().is_ok());
//! ```

use super::state::EnPassant;
use super::{Board, Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Board` and `Position` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    en_passant: Option<EnPassant>,
    halfmove_clock: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant: None,
            halfmove_clock: 0,
        }
    }

    /// Create a builder starting from the classic initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().collect();
        builder
    }

    /// Place an unmoved piece on a square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(kind, color))
    }

    /// Place a piece that has already moved (no castling or double push).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::moved(kind, color))
    }

    /// Place a piece with explicit state.
    #[must_use]
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant state: `target` is the skipped square, `victim`
    /// the pawn that just advanced two squares.
    #[must_use]
    pub const fn en_passant(mut self, target: Square, victim: Square) -> Self {
        self.en_passant = Some(EnPassant { target, victim });
        self
    }

    /// Set the half-move clock (for the fifty-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(&self) -> Board {
        let mut board = Board::empty();
        for &(square, piece) in &self.pieces {
            board.set_piece(square, Some(piece));
        }
        board.set_side_to_move(self.side_to_move);
        board.set_en_passant(self.en_passant);
        debug_assert_eq!(board.hash(), board.compute_hash());
        board
    }

    /// Build a position whose history starts at the built board.
    #[must_use]
    pub fn build_position(&self) -> Position {
        Position::from_parts(self.build(), Default::default(), self.halfmove_clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e9"), Color::Black, PieceKind::King)
            .build();

        assert!(board.piece_at(sq("e1")).is_some());
        assert!(board.piece_at(sq("e9")).is_some());
        assert!(board.piece_at(sq("a1")).is_none());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e9"), Color::Black, PieceKind::King)
            .side_to_move(Color::Black)
            .build();

        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.hash(), board.compute_hash());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(sq("a1")).build();

        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_moved_piece_hashes_differently() {
        let fresh = BoardBuilder::new()
            .piece(sq("a1"), Color::White, PieceKind::Rook)
            .build();
        let moved = BoardBuilder::new()
            .moved_piece(sq("a1"), Color::White, PieceKind::Rook)
            .build();
        assert_ne!(fresh.hash(), moved.hash());
    }

    #[test]
    fn test_position_carries_clock() {
        let pos = BoardBuilder::starting_position()
            .halfmove_clock(42)
            .build_position();
        assert_eq!(pos.halfmove_clock(), 42);
        assert_eq!(pos.history().len(), 1);
    }
}
