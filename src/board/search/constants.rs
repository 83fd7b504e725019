//! Search constants and parameters.

use crate::board::MATE_SCORE;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default deepest iteration
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default thinking time
pub const DEFAULT_TIME_BUDGET_MS: u64 = 7000;

/// Bound wider than any reachable score, mate scores included
pub const SCORE_INFINITY: i32 = MATE_SCORE * 2;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================

/// Per point of material gained by a capture
pub const CAPTURE_WEIGHT: i32 = 100;

/// Move gives check
pub const CHECK_BONUS: i32 = 50;

/// Move lands on d4, e4, d5 or e5
pub const CENTER_BONUS: i32 = 20;

// ========================================================================
// REDUCTIONS
// ========================================================================

/// LMR starts at this index in the ordered move list
pub const DEFAULT_LMR_MOVE_THRESHOLD: usize = 4;

/// Plies removed on top of the normal one for a reduced first search
pub const DEFAULT_LMR_REDUCTION: u32 = 2;
