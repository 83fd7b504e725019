//! Time sources for the search.
//!
//! The search never reads the system time directly; it asks a [`Clock`]
//! how long it has been running. Tests drive a [`ManualClock`] instead.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Elapsed time since the search started
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Clock backed by [`Instant`]
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    /// Start counting now.
    #[must_use]
    pub fn start() -> Self {
        WallClock {
            start: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for WallClock {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock.
///
/// Time only moves through [`ManualClock::advance`], plus an optional fixed
/// step added on every read.
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed: Mutex<Duration>,
    step: Duration,
}

impl ManualClock {
    /// Clock frozen at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that moves forward by `step` every time it is read
    #[must_use]
    pub fn ticking(step: Duration) -> Self {
        ManualClock {
            elapsed: Mutex::new(Duration::ZERO),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock() += by;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        let mut elapsed = self.elapsed.lock();
        let now = *elapsed;
        *elapsed += self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.elapsed(), Duration::ZERO);
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn test_ticking_clock() {
        let clock = ManualClock::ticking(Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
    }

    #[test]
    fn test_wall_clock_moves_forward() {
        let clock = WallClock::start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}
