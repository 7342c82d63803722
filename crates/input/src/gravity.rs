//! Fixed-interval gravity clock.
//!
//! The host feeds elapsed wall time in; the clock answers how many `Tick`
//! commands became due. Leftover time carries over, so ticks never drift.

use crate::types::DEFAULT_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    accumulator_ms: u32,
}

impl GravityClock {
    /// A clock firing every `interval_ms` (clamped to at least 1ms).
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Advance by `elapsed_ms` and return the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulator_ms.saturating_add(elapsed_ms);
        self.accumulator_ms = total % self.interval_ms;
        total / self.interval_ms
    }

    /// Time left until the next tick
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms - self.accumulator_ms
    }

    /// Drop any partial interval (e.g. after a restart)
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS)
    }
}
