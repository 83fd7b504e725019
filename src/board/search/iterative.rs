use log::debug;

use super::clock::Clock;
use super::move_order::order_moves;
use super::{prefers, SearchContext, SearchResult, SCORE_INFINITY};
use crate::board::{is_mate_score, Board, Color};

impl<C: Clock + ?Sized> SearchContext<'_, C> {
    /// Search depth 1, 2, ... up to `max_depth` until time runs out.
    ///
    /// The last fully completed depth wins. A depth cut short by the clock
    /// only replaces it when its score is strictly better for `color`.
    pub(crate) fn iterative_deepening(&mut self, board: &Board, color: Color) -> SearchResult {
        let mut best: Option<SearchResult> = None;
        let mut cut_short = false;

        for depth in 1..=self.params.max_depth {
            if best.is_some() && self.time_up() {
                cut_short = true;
                break;
            }

            let result = self.minimax(board, depth, -SCORE_INFINITY, SCORE_INFINITY, color);

            if result.terminated {
                cut_short = true;
                let accept = result.best_move.is_some()
                    && best
                        .as_ref()
                        .map_or(true, |prev| prefers(color, result.score, prev.score));
                debug!(
                    "depth {depth} cut short after {} nodes (score {}, {})",
                    self.stats.nodes,
                    result.score,
                    if accept { "kept" } else { "discarded" }
                );
                if accept {
                    best = Some(result);
                }
                break;
            }

            self.stats.depth_reached = depth;
            debug!(
                "depth {depth} score {} nodes {} cache hits {} elapsed {:?}",
                result.score,
                self.stats.nodes,
                self.stats.cache_hits,
                self.clock.elapsed()
            );

            let mate = is_mate_score(result.score);
            best = Some(result);
            if mate {
                break;
            }
        }

        let mut result = best.unwrap_or_else(|| {
            SearchResult::leaf(self.params.evaluator.evaluate(board), cut_short)
        });
        result.terminated = cut_short;

        // Out of time before any move was chosen: fall back to the best
        // ordered move so a legal position never yields no move
        if result.best_move.is_none() {
            let mut moves = board.legal_moves(color);
            order_moves(board, &mut moves, &self.params.evaluator);
            result.best_move = moves.first().copied();
        }
        result
    }
}
