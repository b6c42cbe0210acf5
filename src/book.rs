//! Opening book keyed by board text.
//!
//! Each position key (see [`Board::to_text`](crate::board::Board::to_text))
//! maps to a list of candidate moves with selection weights. Books are
//! built in memory with [`OpeningBook::add_move`] and
//! [`OpeningBook::merge`], or loaded from the JSON produced by the offline
//! trainer with `OpeningBook::from_json` (feature `serde`).

use std::collections::HashMap;

use rand::Rng;

use crate::board::{Board, Color, PieceKind, Square};

/// One candidate move for a book position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub weight: u32,
    pub games: u32,
    pub win_rate: Option<f64>,
}

impl BookMove {
    /// A fresh move seen in one game.
    #[must_use]
    pub fn new(from: Square, to: Square) -> Self {
        BookMove {
            from,
            to,
            promotion: None,
            weight: 1,
            games: 1,
            win_rate: None,
        }
    }

    fn same_move(&self, other: &BookMove) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

/// Candidate moves for one position plus how often it was reached.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookPosition {
    pub moves: Vec<BookMove>,
    pub seen_count: u32,
}

/// How a move is picked among a position's candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookPolicy {
    /// Random pick proportional to weight
    #[default]
    WeightedRandom,
    /// Highest weight; ties go to the first listed
    HighestWeight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpeningBook {
    positions: HashMap<String, BookPosition>,
}

impl OpeningBook {
    #[must_use]
    pub fn new() -> Self {
        OpeningBook::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Key for `board` with `side` to move.
    #[must_use]
    pub fn key(board: &Board, side: Color) -> String {
        board.to_text(side)
    }

    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&BookPosition> {
        self.positions.get(key)
    }

    /// Pick a move for `key` under `policy`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        key: &str,
        policy: BookPolicy,
        rng: &mut R,
    ) -> Option<BookMove> {
        let Some(position) = self.lookup(key) else {
            log_debug!("book: miss");
            return None;
        };
        let moves = &position.moves;
        let first = moves.first()?;

        let chosen = match policy {
            BookPolicy::HighestWeight => moves
                .iter()
                .fold(first, |best, m| if m.weight > best.weight { m } else { best }),
            BookPolicy::WeightedRandom => {
                let total: u64 = moves.iter().map(|m| u64::from(m.weight)).sum();
                if total == 0 {
                    first
                } else {
                    let mut pick = rng.gen_range(0..total);
                    moves
                        .iter()
                        .find(|m| {
                            let w = u64::from(m.weight);
                            if pick < w {
                                true
                            } else {
                                pick -= w;
                                false
                            }
                        })
                        .unwrap_or(first)
                }
            }
        };
        log_debug!(
            "book: hit {}{} (weight {}, {} candidates)",
            chosen.from,
            chosen.to,
            chosen.weight,
            moves.len()
        );
        Some(chosen.clone())
    }

    /// Replace the entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, position: BookPosition) {
        self.positions.insert(key.into(), position);
    }

    /// Record that `mv` was played from `key`.
    ///
    /// Bumps the position's seen count; a known move gains a game, a new
    /// one is appended with weight 1.
    pub fn add_move(&mut self, key: impl Into<String>, mv: BookMove) {
        let position = self.positions.entry(key.into()).or_default();
        position.seen_count += 1;
        match position.moves.iter_mut().find(|m| m.same_move(&mv)) {
            Some(existing) => existing.games += 1,
            None => position.moves.push(BookMove {
                weight: 1,
                games: 1,
                ..mv
            }),
        }
    }

    /// Fold `other` into this book, summing seen counts and games.
    pub fn merge(&mut self, other: &OpeningBook) {
        for (key, theirs) in &other.positions {
            let Some(mine) = self.positions.get_mut(key) else {
                self.positions.insert(key.clone(), theirs.clone());
                continue;
            };
            mine.seen_count += theirs.seen_count;
            for mv in &theirs.moves {
                match mine.moves.iter_mut().find(|m| m.same_move(mv)) {
                    Some(existing) => existing.games += mv.games,
                    None => mine.moves.push(mv.clone()),
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BookPosition)> {
        self.positions.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(feature = "serde")]
pub use json::BookError;

#[cfg(feature = "serde")]
mod json {
    use std::collections::HashMap;
    use std::fmt;

    use serde::Deserialize;

    use super::{BookMove, BookPosition, OpeningBook};
    use crate::board::{PieceKind, Square};

    #[derive(Debug)]
    pub enum BookError {
        Json(serde_json::Error),
        InvalidSquare { row: usize, col: usize },
        InvalidPromotion { letter: char },
    }

    impl fmt::Display for BookError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                BookError::Json(e) => write!(f, "invalid book JSON: {e}"),
                BookError::InvalidSquare { row, col } => {
                    write!(f, "book square ({row}, {col}) is off the board")
                }
                BookError::InvalidPromotion { letter } => {
                    write!(f, "invalid promotion piece '{letter}' in book")
                }
            }
        }
    }

    impl std::error::Error for BookError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                BookError::Json(e) => Some(e),
                _ => None,
            }
        }
    }

    impl From<serde_json::Error> for BookError {
        fn from(e: serde_json::Error) -> Self {
            BookError::Json(e)
        }
    }

    #[derive(Deserialize)]
    struct RawBook {
        #[serde(default)]
        positions: HashMap<String, RawPosition>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawPosition {
        #[serde(default)]
        moves: Vec<RawMove>,
        #[serde(default)]
        seen_count: u32,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawMove {
        from: RawSquare,
        to: RawSquare,
        #[serde(default)]
        promotion: Option<char>,
        #[serde(default = "default_weight")]
        weight: u32,
        #[serde(default)]
        games: u32,
        #[serde(default)]
        win_rate: Option<f64>,
    }

    #[derive(Deserialize)]
    struct RawSquare {
        r: usize,
        c: usize,
    }

    fn default_weight() -> u32 {
        1
    }

    impl RawSquare {
        fn to_square(&self) -> Result<Square, BookError> {
            Square::new(self.r, self.c).ok_or(BookError::InvalidSquare {
                row: self.r,
                col: self.c,
            })
        }
    }

    impl OpeningBook {
        /// Load a book in the trainer's JSON format:
        /// `{"positions": {key: {"moves": [{"from": {"r", "c"}, "to": {...},
        /// "weight", "games", "winRate"}], "seenCount"}}}`.
        pub fn from_json(text: &str) -> Result<OpeningBook, BookError> {
            let raw: RawBook = serde_json::from_str(text)?;
            let mut book = OpeningBook::new();
            for (key, raw_pos) in raw.positions {
                let moves = raw_pos
                    .moves
                    .iter()
                    .map(|m| -> Result<BookMove, BookError> {
                        let promotion = match m.promotion {
                            Some(letter) => Some(
                                PieceKind::from_char(letter)
                                    .filter(|k| k.is_promotion_target())
                                    .ok_or(BookError::InvalidPromotion { letter })?,
                            ),
                            None => None,
                        };
                        Ok(BookMove {
                            from: m.from.to_square()?,
                            to: m.to.to_square()?,
                            promotion,
                            weight: m.weight,
                            games: m.games,
                            win_rate: m.win_rate,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                book.insert(
                    key,
                    BookPosition {
                        moves,
                        seen_count: raw_pos.seen_count,
                    },
                );
            }
            log_debug!("book: loaded {} positions", book.len());
            Ok(book)
        }
    }
}
