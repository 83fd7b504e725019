//! Engine configuration.

use std::time::Duration;

use crate::board::SearchParams;

/// Search depth when `CHESS_AI_DEPTH` is unset or invalid
pub const DEFAULT_DEPTH: u32 = 5;

/// Thinking time when `CHESS_AI_TIME_MS` is unset or invalid
pub const DEFAULT_TIME_MS: u64 = 7000;

/// Engine configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest iterative-deepening iteration
    pub depth: u32,
    /// Time budget per move in milliseconds
    pub time_ms: u64,
}

impl EngineConfig {
    /// Load configuration from environment variables with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        EngineConfig {
            depth: lookup("CHESS_AI_DEPTH")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&d: &u32| d > 0)
                .unwrap_or(DEFAULT_DEPTH),
            time_ms: lookup("CHESS_AI_TIME_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TIME_MS),
        }
    }

    #[must_use]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }

    /// Search parameters for this configuration
    #[must_use]
    pub fn search_params(&self) -> SearchParams {
        SearchParams::default()
            .with_max_depth(self.depth)
            .with_time_budget(self.time_budget())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            time_ms: DEFAULT_TIME_MS,
        }
    }
}

impl From<&EngineConfig> for SearchParams {
    fn from(config: &EngineConfig) -> Self {
        config.search_params()
    }
}
