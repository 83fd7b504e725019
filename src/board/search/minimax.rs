use super::clock::Clock;
use super::move_order::order_moves;
use super::{SearchContext, SearchResult, SCORE_INFINITY};
use crate::board::{is_mate_score, Board, Color};
use crate::cache::{BoundType, CacheEntry};
use crate::zobrist::position_hash;

impl<C: Clock + ?Sized> SearchContext<'_, C> {
    /// Alpha-beta minimax. White maximizes, Black minimizes.
    ///
    /// Returns as soon as the time budget runs out, with `terminated` set;
    /// such a result is provisional all the way up.
    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        color: Color,
    ) -> SearchResult {
        self.stats.nodes += 1;
        let params = self.params;

        if self.time_up() {
            return SearchResult::leaf(params.evaluator.evaluate(board), true);
        }
        if depth == 0 {
            return SearchResult::leaf(params.evaluator.evaluate(board), false);
        }

        let mut moves = board.legal_moves(color);
        if moves.is_empty() {
            // Prefer quicker mates: more depth left means fewer plies played
            let eval = params.evaluator.evaluate(board);
            let score = if is_mate_score(eval) {
                eval + eval.signum() * depth as i32
            } else {
                eval
            };
            return SearchResult::leaf(score, false);
        }

        let hash = params.use_cache.then(|| position_hash(board, color));
        if let Some(hash) = hash {
            if let Some(entry) = self.cache.probe(hash, depth) {
                if entry.usable(alpha, beta) {
                    self.stats.cache_hits += 1;
                    return SearchResult {
                        best_move: entry.best_move,
                        score: entry.score,
                        terminated: false,
                    };
                }
            }
        }

        order_moves(board, &mut moves, &params.evaluator);

        let (alpha_orig, beta_orig) = (alpha, beta);
        let maximizing = color == Color::White;
        let mut best = SearchResult {
            best_move: None,
            score: if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY },
            terminated: false,
        };

        for (idx, mv) in moves.iter().enumerate() {
            let mut child = board.branch();
            if child.apply_move(mv.from(), mv.to).is_err() {
                continue;
            }

            let full_depth = depth - 1;
            let reduce = params.lmr_reduction > 0
                && idx >= params.lmr_move_threshold
                && full_depth > 0;

            let reply = if reduce {
                let reduced = full_depth.saturating_sub(params.lmr_reduction);
                let shallow = self.minimax(&child, reduced, alpha, beta, color.opponent());
                let promising = if maximizing {
                    shallow.score > alpha
                } else {
                    shallow.score < beta
                };
                if promising && !shallow.terminated {
                    self.minimax(&child, full_depth, alpha, beta, color.opponent())
                } else {
                    shallow
                }
            } else {
                self.minimax(&child, full_depth, alpha, beta, color.opponent())
            };

            let improves = if maximizing {
                reply.score > best.score
            } else {
                reply.score < best.score
            };
            if improves || best.best_move.is_none() {
                best.score = reply.score;
                best.best_move = Some(*mv);
            }
            best.terminated |= reply.terminated;

            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
            if beta <= alpha || best.terminated {
                break;
            }
        }

        if let Some(hash) = hash {
            if !best.terminated {
                self.cache.store(
                    hash,
                    CacheEntry {
                        best_move: best.best_move,
                        score: best.score,
                        depth,
                        bound: BoundType::classify(best.score, alpha_orig, beta_orig),
                    },
                );
            }
        }
        best
    }
}
