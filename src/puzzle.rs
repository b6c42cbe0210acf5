//! Random mate puzzles.
//!
//! A puzzle is a White-to-move endgame with a verified forced mate,
//! exchanged as board text (see [`Board::to_text`]).

use rand::Rng;

use crate::board::{
    find_forced_mate, Board, Color, Move, NotationError, Piece, PieceKind, Position, Square,
    BOARD_SIZE, NUM_SQUARES,
};

/// Random positions tried before giving up.
pub const MAX_ATTEMPTS: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Queen and Rook, mate in one
    Easy,
    /// Rook and Bishop, mate in two
    Hard,
}

impl Difficulty {
    /// Full moves White needs to mate.
    #[must_use]
    pub const fn mate_in(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Hard => 2,
        }
    }

    const fn attackers(self) -> [PieceKind; 2] {
        match self {
            Difficulty::Easy => [PieceKind::Queen, PieceKind::Rook],
            Difficulty::Hard => [PieceKind::Rook, PieceKind::Bishop],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub difficulty: Difficulty,
    /// Starting position as board text, White to move
    pub board_text: String,
    /// Attacker and defender moves, ending with the mate
    pub solution: Vec<Move>,
    pub mate_in: usize,
}

impl Puzzle {
    /// Parse the puzzle's starting position.
    pub fn position(&self) -> Result<Position, NotationError> {
        Board::from_text(&self.board_text).map(Position::from_board)
    }
}

/// Generate a puzzle whose shortest forced mate is exactly
/// `difficulty.mate_in()` moves.
///
/// Returns `None` when no suitable position turns up within
/// [`MAX_ATTEMPTS`].
pub fn generate_puzzle<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Option<Puzzle> {
    let mate_in = difficulty.mate_in();
    let max_ply = 2 * mate_in - 1;

    for attempt in 0..MAX_ATTEMPTS {
        let board = random_position(difficulty, rng);
        if board.validate().is_err() || board.is_in_check(Color::Black) {
            continue;
        }

        // Verify on the parsed text so castling and double-push rights
        // match what a reader of the puzzle sees.
        let board_text = board.to_text(Color::White);
        let Ok(parsed) = Board::from_text(&board_text) else {
            continue;
        };
        let mut position = Position::from_board(parsed);
        let Ok(Some(solution)) = find_forced_mate(&mut position, Color::White, max_ply) else {
            continue;
        };
        if solution.len() != max_ply {
            log_trace!("puzzle: attempt {} mates too quickly", attempt);
            continue;
        }

        log_debug!(
            "puzzle: {:?} mate in {} after {} attempts",
            difficulty,
            mate_in,
            attempt + 1
        );
        return Some(Puzzle {
            difficulty,
            board_text,
            solution,
            mate_in,
        });
    }

    log_debug!("puzzle: gave up after {} attempts", MAX_ATTEMPTS);
    None
}

/// Kings apart, the attacking pair for White, and a black pawn half the time.
fn random_position<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Board {
    let mut board = Board::empty();

    let black_king = random_square(rng);
    board.set_piece(black_king, Some(Piece::moved(PieceKind::King, Color::Black)));

    let white_king = loop {
        let sq = random_square(rng);
        if sq.distance(black_king) > 1 {
            break sq;
        }
    };
    board.set_piece(white_king, Some(Piece::moved(PieceKind::King, Color::White)));

    for kind in difficulty.attackers() {
        let sq = random_empty_square(&board, rng, |_| true);
        board.set_piece(sq, Some(Piece::moved(kind, Color::White)));
    }

    if rng.gen_bool(0.5) {
        let sq = random_empty_square(&board, rng, |sq| sq.row() != 0 && sq.row() != BOARD_SIZE - 1);
        board.set_piece(sq, Some(Piece::moved(PieceKind::Pawn, Color::Black)));
    }

    board.set_side_to_move(Color::White);
    board
}

fn random_square<R: Rng + ?Sized>(rng: &mut R) -> Square {
    Square::from_index(rng.gen_range(0..NUM_SQUARES))
}

fn random_empty_square<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    allowed: impl Fn(Square) -> bool,
) -> Square {
    loop {
        let sq = random_square(rng);
        if board.piece_at(sq).is_none() && allowed(sq) {
            return sq;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_positions_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let board = random_position(Difficulty::Easy, &mut rng);
            assert!(board.validate().is_ok());
            assert_eq!(board.side_to_move(), Color::White);
            let kings: Vec<_> = board
                .pieces()
                .filter(|(_, p)| p.kind == PieceKind::King)
                .map(|(sq, _)| sq)
                .collect();
            assert_eq!(kings.len(), 2);
            assert!(kings[0].distance(kings[1]) > 1);
            for (sq, piece) in board.pieces() {
                if piece.kind == PieceKind::Pawn {
                    assert_eq!(piece.color, Color::Black);
                    assert!(sq.row() != 0 && sq.row() != BOARD_SIZE - 1);
                }
            }
        }
    }

    #[test]
    fn easy_puzzle_is_a_mate_in_one() {
        let mut rng = StdRng::seed_from_u64(2024);
        let puzzle = generate_puzzle(Difficulty::Easy, &mut rng).expect("puzzle");
        assert_eq!(puzzle.mate_in, 1);
        assert_eq!(puzzle.solution.len(), 1);

        let mut position = puzzle.position().unwrap();
        assert_eq!(position.side_to_move(), Color::White);
        assert!(!position.is_in_check(Color::Black));
        position.apply(puzzle.solution[0]).unwrap();
        assert!(position.is_checkmate(Color::Black));
    }

    #[test]
    fn hard_puzzle_is_a_mate_in_two() {
        let mut rng = StdRng::seed_from_u64(7);
        let puzzle = generate_puzzle(Difficulty::Hard, &mut rng).expect("puzzle");
        assert_eq!(puzzle.solution.len(), 3);

        let mut position = puzzle.position().unwrap();
        for &mv in &puzzle.solution {
            position.apply(mv).unwrap();
        }
        assert!(position.is_checkmate(Color::Black));
    }
}
