//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Opening book replies for Black's first moves
//! - Iterative deepening under a wall-time budget
//! - Alpha-beta minimax with late move reduction
//! - Move ordering by trades, checks, center control and static eval
//! - Per-search position cache keyed by position and exact depth

mod clock;
mod constants;
mod iterative;
mod minimax;
mod move_order;
mod params;

use std::time::Duration;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cache::PositionCache;

use super::book::get_book_move;
use super::{Board, Color, Move, Piece, Square};

pub use clock::{Clock, ManualClock, WallClock};
pub use constants::SCORE_INFINITY;
pub use move_order::{move_score, order_moves};
pub use params::SearchParams;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move; `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Score from White's point of view
    pub score: i32,
    /// The time budget ran out while producing this result
    pub terminated: bool,
}

impl SearchResult {
    pub(crate) const fn leaf(score: i32, terminated: bool) -> Self {
        SearchResult {
            best_move: None,
            score,
            terminated,
        }
    }

    #[must_use]
    pub fn piece(&self) -> Option<Piece> {
        self.best_move.map(|mv| mv.piece)
    }

    #[must_use]
    pub fn destination(&self) -> Option<Square> {
        self.best_move.map(|mv| mv.to)
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    /// Deepest fully completed iteration
    pub depth_reached: u32,
}

/// State of one in-flight search. Owns its cache; nothing is shared.
pub(crate) struct SearchContext<'a, C: Clock + ?Sized> {
    pub params: &'a SearchParams,
    pub clock: &'a C,
    pub cache: PositionCache,
    pub stats: SearchStats,
}

impl<'a, C: Clock + ?Sized> SearchContext<'a, C> {
    pub fn new(params: &'a SearchParams, clock: &'a C) -> Self {
        SearchContext {
            params,
            clock,
            cache: PositionCache::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn time_up(&self) -> bool {
        self.params
            .time_budget
            .is_some_and(|budget| self.clock.elapsed() >= budget)
    }
}

/// True if `new` is strictly better than `old` for `color`
#[inline]
pub(crate) fn prefers(color: Color, new: i32, old: i32) -> bool {
    match color {
        Color::White => new > old,
        Color::Black => new < old,
    }
}

/// Pick a move for `color` within `depth` plies and `time_budget`.
///
/// Black consults the opening book first. Returns `None` only when `color`
/// has no legal move.
pub fn get_best_move(
    board: &Board,
    color: Color,
    depth: u32,
    time_budget: Duration,
) -> Option<(Piece, Square)> {
    let params = SearchParams::default()
        .with_max_depth(depth)
        .with_time_budget(time_budget);
    let result = find_best_move(board, color, &params);
    result.best_move.map(|mv| (mv.piece, mv.to))
}

/// Full move selection: book, then iterative deepening on the wall clock.
pub fn find_best_move(board: &Board, color: Color, params: &SearchParams) -> SearchResult {
    find_best_move_with_rng(board, color, params, &mut rand::thread_rng())
}

/// [`find_best_move`] with the book's line choice drawn from `rng`
pub fn find_best_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    params: &SearchParams,
    rng: &mut R,
) -> SearchResult {
    if params.use_opening_book && color == Color::Black {
        if let Some(mv) = get_book_move(board, rng) {
            debug!("book move {mv}");
            return SearchResult {
                best_move: Some(mv),
                score: params.evaluator.evaluate(board),
                terminated: false,
            };
        }
    }
    search(board, color, params)
}

/// Iterative deepening on the wall clock, without the book.
pub fn search(board: &Board, color: Color, params: &SearchParams) -> SearchResult {
    search_with_stats(board, color, params).0
}

/// [`search`], also returning node and cache counters.
pub fn search_with_stats(
    board: &Board,
    color: Color,
    params: &SearchParams,
) -> (SearchResult, SearchStats) {
    search_with_clock(board, color, params, &WallClock::start())
}

/// Iterative deepening timed by `clock`.
pub fn search_with_clock<C: Clock + ?Sized>(
    board: &Board,
    color: Color,
    params: &SearchParams,
    clock: &C,
) -> (SearchResult, SearchStats) {
    let mut ctx = SearchContext::new(params, clock);
    let result = ctx.iterative_deepening(board, color);
    (result, ctx.stats)
}

/// One alpha-beta search at exactly `depth`, ignoring the time budget.
///
/// Deterministic for a given position and parameters.
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    color: Color,
    params: &SearchParams,
) -> SearchResult {
    let params = SearchParams {
        time_budget: None,
        ..params.clone()
    };
    let clock = WallClock::start();
    let mut ctx = SearchContext::new(&params, &clock);
    ctx.minimax(board, depth, alpha, beta, color)
}

/// Uniformly random legal move for `color`
pub fn random_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    board.legal_moves(color).choose(rng).copied()
}
