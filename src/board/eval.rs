//! Static evaluation.
//!
//! Scores are in centipawns with positive values favoring White. Each term
//! produces a middlegame and an endgame component; the two are blended by
//! the game phase remaining on the board.

use super::pst::pst_values;
use super::{Board, Color, PieceKind, Square, BOARD_SIZE};

/// Phase at and above which the evaluation is purely middlegame.
pub const MAX_PHASE: i32 = 32;

const BISHOP_PAIR_BONUS: i32 = 50;
const DOUBLED_PAWN_PENALTY: i32 = 15;
const ISOLATED_PAWN_PENALTY: i32 = 20;
const LINKED_PAWN_BONUS: i32 = 10;
const PASSED_PAWN_FACTOR: i32 = 5;

const TEMPO_MG: i32 = 10;
const TEMPO_EG: i32 = 5;

const MOBILITY_MG: i32 = 2;
const MOBILITY_EG: i32 = 3;

const SHIELD_PAWN_BONUS: i32 = 15;
const KING_ATTACKER_PENALTY: i32 = 10;
const KING_ZONE_RADIUS: usize = 2;

/// Material lead above which the mop-up term applies.
const MOP_UP_MARGIN: i32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Score {
    mg: i32,
    eg: i32,
}

impl Score {
    const fn new(mg: i32, eg: i32) -> Self {
        Score { mg, eg }
    }

    const fn both(v: i32) -> Self {
        Score { mg: v, eg: v }
    }
}

impl std::ops::AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl std::ops::SubAssign for Score {
    fn sub_assign(&mut self, rhs: Score) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl std::ops::Mul<i32> for Score {
    type Output = Score;

    fn mul(self, rhs: i32) -> Score {
        Score::new(self.mg * rhs, self.eg * rhs)
    }
}

/// Evaluate `board`, giving the tempo bonus to `perspective`.
///
/// The result favors White when positive, whichever side `perspective` is.
#[must_use]
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let mut score = Score::default();
    let mut material = [0i32; 2];
    let mut bishops = [0u32; 2];
    let mut phase = 0;

    for (sq, piece) in board.pieces() {
        let sign = piece.color.sign();
        let (mg, eg) = pst_values(piece.kind, piece.color, sq);
        let value = if piece.kind == PieceKind::King {
            0
        } else {
            piece.kind.value()
        };
        score += Score::new(value + mg, value + eg) * sign;
        material[piece.color.index()] += value;
        phase += piece.kind.phase_weight();
        if piece.kind == PieceKind::Bishop {
            bishops[piece.color.index()] += 1;
        }
    }

    for color in Color::BOTH {
        let sign = color.sign();
        if bishops[color.index()] >= 2 {
            score += Score::both(BISHOP_PAIR_BONUS) * sign;
        }
        score += pawn_structure(board, color) * sign;
        score += king_safety(board, color) * sign;
    }

    let (white_mobility, black_mobility) = board.mobility_counts();
    score += Score::new(MOBILITY_MG, MOBILITY_EG) * (white_mobility - black_mobility);

    score += Score::new(TEMPO_MG, TEMPO_EG) * perspective.sign();

    let phase = phase.min(MAX_PHASE);
    // Endgame weight above 0.4
    if (MAX_PHASE - phase) * 5 > MAX_PHASE * 2 {
        score.eg += mop_up(board, material);
    }

    (score.mg * phase + score.eg * (MAX_PHASE - phase)) / MAX_PHASE
}

impl Board {
    /// See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        evaluate(self, perspective)
    }

    /// Remaining non-pawn material phase, capped at [`MAX_PHASE`].
    #[must_use]
    pub fn phase(&self) -> i32 {
        self.pieces()
            .map(|(_, p)| p.kind.phase_weight())
            .sum::<i32>()
            .min(MAX_PHASE)
    }
}

fn pawn_counts_by_col(board: &Board, color: Color) -> [i32; BOARD_SIZE] {
    let mut cols = [0; BOARD_SIZE];
    for (sq, piece) in board.pieces_of(color) {
        if piece.kind == PieceKind::Pawn {
            cols[sq.col()] += 1;
        }
    }
    cols
}

fn is_own_pawn(board: &Board, sq: Option<Square>, color: Color) -> bool {
    sq.and_then(|sq| board.piece_at(sq))
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == color)
}

/// A pawn is supported when an own pawn stands diagonally behind it.
fn is_supported(board: &Board, sq: Square, color: Color) -> bool {
    let back = -color.pawn_direction();
    is_own_pawn(board, sq.offset(back, -1), color) || is_own_pawn(board, sq.offset(back, 1), color)
}

/// No enemy pawn ahead of `sq` on its own or an adjacent column.
fn is_passed(board: &Board, sq: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let enemy = color.opponent();
    for dc in -1..=1 {
        let mut cur = sq.offset(dir, dc);
        while let Some(s) = cur {
            if is_own_pawn(board, Some(s), enemy) {
                return false;
            }
            cur = s.offset(dir, 0);
        }
    }
    true
}

fn pawn_structure(board: &Board, color: Color) -> Score {
    let mut score = Score::default();
    let cols = pawn_counts_by_col(board, color);

    for col in 0..BOARD_SIZE {
        if cols[col] == 0 {
            continue;
        }
        if cols[col] > 1 {
            score -= Score::both(DOUBLED_PAWN_PENALTY * (cols[col] - 1));
        }
        let left = col.checked_sub(1).map_or(0, |c| cols[c]);
        let right = cols.get(col + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            score -= Score::both(ISOLATED_PAWN_PENALTY);
        }
    }

    for (sq, piece) in board.pieces_of(color) {
        if piece.kind != PieceKind::Pawn {
            continue;
        }
        let supported = is_supported(board, sq, color);
        if is_passed(board, sq, color) {
            let progress = match color {
                Color::White => (BOARD_SIZE - 1 - sq.row()) as i32,
                Color::Black => sq.row() as i32,
            };
            let mut bonus = progress * progress * PASSED_PAWN_FACTOR;
            if supported {
                bonus = (bonus * 13 + 5) / 10;
            }
            score += Score::new(bonus, bonus * 2);
        } else if supported {
            score += Score::both(LINKED_PAWN_BONUS);
        }
    }
    score
}

/// Pawn shield in front of the king and enemy pieces crowding it.
/// Middlegame only.
fn king_safety(board: &Board, color: Color) -> Score {
    let Some(king) = board.king_square(color) else {
        return Score::default();
    };
    let dir = color.pawn_direction();
    let shield = (-1..=1)
        .filter(|&dc| is_own_pawn(board, king.offset(dir, dc), color))
        .count() as i32;

    let attackers = board
        .pieces_of(color.opponent())
        .filter(|(sq, p)| {
            !matches!(p.kind, PieceKind::Pawn | PieceKind::King)
                && sq.distance(king) <= KING_ZONE_RADIUS
        })
        .count() as i32;

    Score::new(
        shield * SHIELD_PAWN_BONUS - attackers * KING_ATTACKER_PENALTY,
        0,
    )
}

/// Endgame bonus for the side clearly ahead: push the enemy king to the
/// edge and bring the own king closer. Returned from White's view.
fn mop_up(board: &Board, material: [i32; 2]) -> i32 {
    let (Some(white_king), Some(black_king)) = (
        board.king_square(Color::White),
        board.king_square(Color::Black),
    ) else {
        return 0;
    };
    let white = material[Color::White.index()];
    let black = material[Color::Black.index()];
    if white > black + MOP_UP_MARGIN {
        mop_up_bonus(white_king, black_king)
    } else if black > white + MOP_UP_MARGIN {
        -mop_up_bonus(black_king, white_king)
    } else {
        0
    }
}

fn mop_up_bonus(own_king: Square, enemy_king: Square) -> i32 {
    let center = (BOARD_SIZE / 2) as i32;
    let er = enemy_king.row() as i32;
    let ec = enemy_king.col() as i32;
    let enemy_center_distance = (er - center).abs() + (ec - center).abs();
    let king_distance = own_king.manhattan(enemy_king) as i32;
    enemy_center_distance * 10 + (14 - king_distance) * 4
}
