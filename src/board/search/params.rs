use std::time::Duration;

use super::constants::{
    DEFAULT_LMR_MOVE_THRESHOLD, DEFAULT_LMR_REDUCTION, DEFAULT_MAX_DEPTH, DEFAULT_TIME_BUDGET_MS,
};
use crate::board::Evaluator;

/// Knobs for one search.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Deepest iteration, in plies
    pub max_depth: u32,
    /// Wall-time budget; `None` searches every depth to completion
    pub time_budget: Option<Duration>,
    /// Moves at or past this index in the ordered list are reduced
    pub lmr_move_threshold: usize,
    /// Extra plies removed from a reduced move's first search
    pub lmr_reduction: u32,
    /// Consult the opening book before searching (Black only)
    pub use_opening_book: bool,
    pub use_cache: bool,
    pub evaluator: Evaluator,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget: Some(Duration::from_millis(DEFAULT_TIME_BUDGET_MS)),
            lmr_move_threshold: DEFAULT_LMR_MOVE_THRESHOLD,
            lmr_reduction: DEFAULT_LMR_REDUCTION,
            use_opening_book: true,
            use_cache: true,
            evaluator: Evaluator::default(),
        }
    }
}

impl SearchParams {
    /// Fixed-depth search with no time limit and no book
    #[must_use]
    pub fn fixed_depth(depth: u32) -> Self {
        SearchParams {
            max_depth: depth,
            time_budget: None,
            use_opening_book: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Turn late-move reduction off
    #[must_use]
    pub fn without_lmr(mut self) -> Self {
        self.lmr_reduction = 0;
        self
    }
}
