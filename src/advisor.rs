//! Move advisor: opening book first, then search.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    search, BoardError, Color, Move, Position, SearchConfig, SearchResult, SearchState,
    DEFAULT_PROMOTION, DEFAULT_TT_MB,
};
use crate::book::{BookMove, BookPolicy, OpeningBook};

/// Plies during which the book is consulted.
pub const DEFAULT_MAX_BOOK_PLIES: usize = 12;

#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    pub tt_mb: usize,
    pub policy: BookPolicy,
    pub max_book_plies: usize,
    /// Seed for book draws; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            tt_mb: DEFAULT_TT_MB,
            policy: BookPolicy::WeightedRandom,
            max_book_plies: DEFAULT_MAX_BOOK_PLIES,
            seed: None,
        }
    }
}

/// Where a recommendation came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advice {
    Book(Move),
    Search(SearchResult),
}

impl Advice {
    /// The recommended move, if any.
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        match self {
            Advice::Book(mv) => Some(*mv),
            Advice::Search(result) => result.best_move,
        }
    }

    #[must_use]
    pub fn is_book(&self) -> bool {
        matches!(self, Advice::Book(_))
    }
}

/// Keeps search tables warm across calls and owns the book RNG.
pub struct Advisor {
    state: SearchState,
    book: Option<Arc<OpeningBook>>,
    policy: BookPolicy,
    max_book_plies: usize,
    rng: StdRng,
}

impl Advisor {
    #[must_use]
    pub fn new(config: AdvisorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Advisor {
            state: SearchState::new(config.tt_mb),
            book: None,
            policy: config.policy,
            max_book_plies: config.max_book_plies,
            rng,
        }
    }

    #[must_use]
    pub fn with_book(mut self, book: Arc<OpeningBook>) -> Self {
        self.book = Some(book);
        self
    }

    pub fn set_book(&mut self, book: Option<Arc<OpeningBook>>) {
        self.book = book;
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Drop everything the search tables have learned.
    pub fn new_game(&mut self) {
        self.state.clear();
    }

    /// Recommend a move for `side`.
    ///
    /// A legal book move is returned while the game is within the book
    /// window; otherwise a time-boxed search decides.
    pub fn best_move(
        &mut self,
        position: &mut Position,
        side: Color,
        time_limit_ms: u64,
    ) -> Result<Advice, BoardError> {
        position.board().validate()?;

        if let Some(mv) = self.book_move(position, side) {
            log_info!("advisor: book move {}", mv);
            return Ok(Advice::Book(mv));
        }

        let result = search(
            position,
            side,
            SearchConfig::time(time_limit_ms),
            &mut self.state,
        )?;
        Ok(Advice::Search(result))
    }

    fn book_move(&mut self, position: &mut Position, side: Color) -> Option<Move> {
        let book = self.book.as_ref()?;
        if position.ply() >= self.max_book_plies {
            return None;
        }
        let key = position.board().to_text(side);
        let entry = book.select(&key, self.policy, &mut self.rng)?;
        let resolved = resolve(position, side, &entry);
        if resolved.is_none() {
            log_debug!(
                "advisor: book move {}{} is not legal here",
                entry.from,
                entry.to
            );
        }
        resolved
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Advisor::new(AdvisorConfig::default())
    }
}

/// Match a book entry against the legal moves for `side`.
fn resolve(position: &mut Position, side: Color, entry: &BookMove) -> Option<Move> {
    let wanted = entry.promotion.unwrap_or(DEFAULT_PROMOTION);
    position
        .legal_moves(side)
        .into_iter()
        .filter(|mv| mv.from() == entry.from && mv.to() == entry.to)
        .find(|mv| mv.promotion().map_or(true, |kind| kind == wanted))
}
