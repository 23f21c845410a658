#![forbid(unsafe_code)]

//! Injectable monotonic clocks.
//!
//! The effect components never read time themselves; every state transition
//! takes a timestamp argument. A [`Clock`] is how the host produces those
//! timestamps: [`MonotonicClock`] in production, [`ManualClock`] in tests
//! and deterministic simulations.
//!
//! Timestamps are `Duration` since the clock's own origin. Only differences
//! between timestamps from the same clock are meaningful.

use std::cell::Cell;
use std::time::Duration;

use web_time::Instant;

/// A monotonic time source.
pub trait Clock {
    /// Elapsed time since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock backed monotonic clock.
///
/// Uses `web_time::Instant`, which falls back to `performance.now()` on
/// wasm targets, so the same host code runs natively and in a browser.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of creation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock for tests and scripted simulations.
///
/// Interior mutability keeps the `Clock` trait read-only for callers while
/// letting the driving code move time forward between events.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock at a specific time.
    #[must_use]
    pub fn at(now: Duration) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Advance the clock by a delta.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jump the clock to an absolute time.
    ///
    /// Times earlier than the current reading are ignored; the clock stays
    /// monotonic like the real one.
    pub fn set(&self, now: Duration) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_is_non_decreasing() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(32));
    }

    #[test]
    fn manual_clock_set_ignores_backwards_jumps() {
        let clock = ManualClock::at(Duration::from_secs(5));
        clock.set(Duration::from_secs(3));
        assert_eq!(clock.now(), Duration::from_secs(5));
        clock.set(Duration::from_secs(7));
        assert_eq!(clock.now(), Duration::from_secs(7));
    }
}
