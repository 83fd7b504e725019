//! Move ordering utilities for search.

use std::cmp::Reverse;

use super::constants::{CAPTURE_WEIGHT, CENTER_BONUS, CHECK_BONUS};
use crate::board::{Board, Evaluator, Move, Square};

const CENTER: [Square; 4] = [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

/// Heuristic value of `mv` for the side making it; higher is tried first.
///
/// Rewards winning trades, checks, central squares and gained mobility,
/// then adds the static evaluation of the resulting position from the
/// mover's point of view.
#[must_use]
pub fn move_score(board: &Board, mv: &Move, evaluator: &Evaluator) -> i32 {
    let mover = mv.piece.color;
    let mut score = 0;

    if let Some(victim) = board.get_piece(mv.to) {
        score += CAPTURE_WEIGHT * (victim.value() - mv.piece.value());
    }
    if CENTER.contains(&mv.to) {
        score += CENTER_BONUS;
    }

    let mut after = board.branch();
    if after.apply_move(mv.from(), mv.to).is_err() {
        return score;
    }
    if after.is_king_in_check(mover.opponent()) {
        score += CHECK_BONUS;
    }
    let mobility = after.pseudo_mobility(mover);
    if mobility > board.pseudo_mobility(mover) {
        score += mobility as i32;
    }
    score + mover.sign() * evaluator.evaluate(&after)
}

/// Sort `moves` best first. Ties keep their generation order.
pub fn order_moves(board: &Board, moves: &mut [Move], evaluator: &Evaluator) {
    moves.sort_by_cached_key(|mv| Reverse(move_score(board, mv, evaluator)));
}
