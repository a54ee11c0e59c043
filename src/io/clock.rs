//! Monotonic millisecond clock.

use super::Clock;
use std::time::Instant;

/// Production clock backed by [`Instant`].
///
/// The epoch is fixed when the clock is constructed, so the first reading is
/// close to 0 and readings never decrease.
///
/// # Example
///
/// ```rust
/// use turret::io::{Clock, MonotonicClock};
///
/// let mut clock = MonotonicClock::new();
/// let first = clock.now_ms();
/// let second = clock.now_ms();
/// assert!(second >= first);
/// ```
#[derive(Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Create a clock whose epoch is the moment of construction.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&mut self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
