//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `PieceKind`, `Color` and `Piece`
//! - `Square` - (row, col) board coordinate
//! - `SquareSet` - 64-bit set of squares for attack maps
//! - `Move` and `MoveRecord` - move requests and executed history

mod moves;
mod piece;
mod square;
mod square_set;

pub use moves::{Move, MoveRecord};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use square_set::SquareSet;
