//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal movement per piece kind
//! - `legality.rs` - King safety, check, checkmate, stalemate, castling
//! - `make_move.rs` - Move execution and rejection
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax, iterative deepening, time budget
//! - `proptest.rs` - Property-based tests

mod make_move;

use crate::board::Square;

/// Square from algebraic notation
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}
