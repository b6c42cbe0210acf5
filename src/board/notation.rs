//! Plain-text board encoding.
//!
//! A board is written as 81 two-character cells in row-major order followed
//! by the side to move: `"wk"` is a white king, `"be"` a black Angel and
//! `".."` an empty square. The same text keys the opening book.

use std::fmt;

use super::error::NotationError;
use super::{Board, Color, Piece, PieceKind, Square, KING_HOME_COL, BOARD_SIZE, NUM_SQUARES};

/// Length of a board text: two characters per square plus the turn.
pub const BOARD_TEXT_LEN: usize = NUM_SQUARES * 2 + 1;

const EMPTY_CELL: &str = "..";

impl Board {
    /// Encode the board with `side` as the side to move.
    #[must_use]
    pub fn to_text(&self, side: Color) -> String {
        let mut text = String::with_capacity(BOARD_TEXT_LEN);
        for cell in &self.squares {
            match cell {
                Some(piece) => {
                    text.push(piece.color.to_char());
                    text.push(piece.kind.to_char());
                }
                None => text.push_str(EMPTY_CELL),
            }
        }
        text.push(side.to_char());
        text
    }

    /// Decode a board text.
    ///
    /// `has_moved` is not part of the text, so it is inferred: pawns off
    /// their starting row, kings off their home square and rooks off the
    /// back-row corners count as moved.
    pub fn from_text(text: &str) -> Result<Board, NotationError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != BOARD_TEXT_LEN {
            return Err(NotationError::WrongLength {
                expected: BOARD_TEXT_LEN,
                found: chars.len(),
            });
        }

        let mut board = Board::empty();
        for (index, cell) in chars[..NUM_SQUARES * 2].chunks(2).enumerate() {
            let (c0, c1) = (cell[0], cell[1]);
            if c0 == '.' && c1 == '.' {
                continue;
            }
            let invalid = || NotationError::InvalidCell {
                index,
                cell: cell.iter().collect(),
            };
            let color = Color::from_char(c0).ok_or_else(invalid)?;
            let kind = PieceKind::from_char(c1)
                .filter(|_| c1.is_ascii_lowercase())
                .ok_or_else(invalid)?;
            let sq = Square::from_index(index);
            let piece = Piece {
                kind,
                color,
                has_moved: !on_home_square(kind, color, sq),
            };
            board.put(sq, piece);
        }

        let turn = chars[BOARD_TEXT_LEN - 1];
        let side = Color::from_char(turn).ok_or(NotationError::InvalidTurn { found: turn })?;
        board.set_side_to_move(side);
        Ok(board)
    }
}

fn on_home_square(kind: PieceKind, color: Color, sq: Square) -> bool {
    match kind {
        PieceKind::Pawn => sq.row() == color.pawn_start_row(),
        PieceKind::King => sq.row() == color.back_row() && sq.col() == KING_HOME_COL,
        PieceKind::Rook => {
            sq.row() == color.back_row() && (sq.col() == 0 || sq.col() == BOARD_SIZE - 1)
        }
        _ => true,
    }
}

impl fmt::Display for Board {
    /// Diagram with White in uppercase, rank 9 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let c = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| match p.color {
                        Color::White => p.kind.to_char().to_ascii_uppercase(),
                        Color::Black => p.kind.to_char(),
                    });
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefghi")
    }
}
