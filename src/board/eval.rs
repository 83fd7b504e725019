//! Static evaluation.
//!
//! Scores are from White's point of view: positive favors White, negative
//! favors Black. A pawn on a neutral square is worth 100.

use std::sync::Arc;

use super::pst::PieceSquareTables;
use super::{Board, Color};

/// Score of a delivered checkmate. Stands in for infinity; every
/// non-terminal score stays far below it.
pub const MATE_SCORE: i32 = 1_000_000;

/// Points per legal move
const MOBILITY_WEIGHT: i32 = 2;

/// Penalty for the side whose king is attacked
const CHECK_PENALTY: i32 = 100;

/// Evaluation function bound to a set of piece-square tables.
#[derive(Clone, Debug)]
pub struct Evaluator {
    tables: Arc<PieceSquareTables>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            tables: PieceSquareTables::global(),
        }
    }
}

impl Evaluator {
    #[must_use]
    pub fn new(tables: PieceSquareTables) -> Self {
        Evaluator {
            tables: Arc::new(tables),
        }
    }

    /// Evaluator over tables that are already shared
    #[must_use]
    pub fn with_shared(tables: Arc<PieceSquareTables>) -> Self {
        Evaluator { tables }
    }

    #[inline]
    #[must_use]
    pub fn tables(&self) -> &PieceSquareTables {
        &self.tables
    }

    /// Score `board`.
    ///
    /// A checkmated side scores [`MATE_SCORE`] against it. Otherwise the sum
    /// of material scaled by square, a mobility term over legal moves and a
    /// penalty for a king in check.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i32 {
        let mut score = self.material(board);

        for color in Color::BOTH {
            let in_check = board.is_king_in_check(color);
            let mobility = board.legal_moves(color).len() as i32;
            if in_check && mobility == 0 {
                return -color.sign() * MATE_SCORE;
            }
            score += color.sign() * MOBILITY_WEIGHT * mobility;
            if in_check {
                score -= color.sign() * CHECK_PENALTY;
            }
        }
        score
    }

    /// Material weighted by piece-square bonus. Kings add nothing.
    #[must_use]
    pub fn material(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|p| {
                let bonus = self.tables.value(p.kind, p.color, p.square);
                p.color.sign() * p.value() * (100 + bonus)
            })
            .sum()
    }
}

impl Board {
    /// [`Evaluator::evaluate`] with the process-wide tables
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        Evaluator::default().evaluate(self)
    }
}

/// True for scores only a checkmate produces
#[inline]
#[must_use]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE
}
