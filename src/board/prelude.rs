//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.game_status(Color::White), GameStatus::Ongoing);
//! ```

pub use super::{
    find_best_move, get_best_move, Board, BoardBuilder, Color, FenError, GameStatus, Move,
    MoveError, Piece, PieceKind, SearchParams, SearchResult, Square, SquareError,
};
