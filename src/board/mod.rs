//! Chess board representation and game logic.
//!
//! An 8x8 grid of pieces stored by value, pseudo-legal move generation per
//! piece kind, a king-safety legality filter with castling, static
//! evaluation, an opening book and the alpha-beta search built on them.
//! Promotion and en passant are not part of the rule set.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod book;
mod builder;
mod error;
mod eval;
mod fen;
mod legality;
mod make_move;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use legality::GameStatus;
pub use state::Board;
pub use types::{Color, Move, MoveRecord, Piece, PieceKind, Square, SquareSet};

// Evaluation and opening book
pub use book::{book_lines, get_book_move, OpeningLine, BOOK_DEPTH};
pub use eval::{is_mate_score, Evaluator, MATE_SCORE};
pub use pst::PieceSquareTables;

// Public API - search functions and configuration
pub use search::{
    find_best_move, find_best_move_with_rng, get_best_move, minimax, move_score, order_moves,
    random_move, search, search_with_clock, search_with_stats, Clock, ManualClock, SearchParams,
    SearchResult, SearchStats, WallClock, SCORE_INFINITY,
};
