//! Clock sources used to stamp `created_at` on new parts

use chrono::Utc;

/// Source of the current time in milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that returns a fixed instant until moved
///
/// Useful for deterministic tests and for replaying recorded bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    /// Create a clock frozen at `millis`
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }

    /// Move the clock to `millis`
    pub fn set(&mut self, millis: i64) {
        self.millis = millis;
    }

    /// Move the clock forward by `delta` milliseconds
    pub fn advance(&mut self, delta: i64) {
        self.millis += delta;
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}
