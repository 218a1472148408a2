//! Bounded tick countdowns.
//!
//! A `Countdown` counts from `from` down to `to`, one tick at a time.
//! An inverted range (`from <= to`) is a configuration mistake with no
//! runtime recovery, so construction fails fast.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal scheduler configuration errors.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// A countdown was configured to start at or below its target.
    #[error("countdown must start above its target (from={from}, to={to})")]
    InvertedCountdown { from: u32, to: u32 },
}

/// A one-tick-at-a-time countdown from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    from: u32,
    to: u32,
    remaining: u32,
}

impl Countdown {
    /// Create a countdown. Fails fast when `from <= to`.
    pub fn new(from: u32, to: u32) -> Result<Self, SchedulerError> {
        if from <= to {
            return Err(SchedulerError::InvertedCountdown { from, to });
        }
        Ok(Self {
            from,
            to,
            remaining: from,
        })
    }

    /// Advance one tick. Returns true once the target is reached.
    pub fn tick(&mut self) -> bool {
        if self.remaining > self.to {
            self.remaining -= 1;
        }
        self.remaining == self.to
    }

    /// Restart from the configured start value.
    pub fn restart(&mut self) {
        self.remaining = self.from;
    }

    /// Restart with a new start value.
    ///
    /// The caller must keep `from` above the target; scheduler waits
    /// are floored well above zero, so this is a debug assertion, not
    /// a runtime error.
    pub fn restart_from(&mut self, from: u32) {
        debug_assert!(from > self.to, "countdown restarted at or below target");
        self.from = from;
        self.remaining = from;
    }

    /// Push the current countdown further from its target.
    pub fn extend(&mut self, ticks: u32) {
        self.remaining = self.remaining.saturating_add(ticks);
    }

    /// Ticks left until the target.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining - self.to
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.remaining == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_fails_fast() {
        assert_eq!(
            Countdown::new(3, 3),
            Err(SchedulerError::InvertedCountdown { from: 3, to: 3 })
        );
        assert!(Countdown::new(0, 5).is_err());
        assert!(Countdown::new(0, 0).is_err());
        assert!(Countdown::new(1, 0).is_ok());
    }

    #[test]
    fn test_counts_down_to_target() {
        let mut cd = Countdown::new(3, 0).unwrap();
        assert!(!cd.tick());
        assert!(!cd.tick());
        assert!(cd.tick());
        assert!(cd.is_done());
        // Further ticks stay at the target.
        assert!(cd.tick());
        assert_eq!(cd.remaining(), 0);
    }

    #[test]
    fn test_restart_and_extend() {
        let mut cd = Countdown::new(2, 0).unwrap();
        cd.tick();
        cd.restart();
        assert_eq!(cd.remaining(), 2);

        cd.extend(3);
        assert_eq!(cd.remaining(), 5);

        cd.restart_from(10);
        assert_eq!(cd.remaining(), 10);
        cd.restart();
        assert_eq!(cd.remaining(), 10);
    }

    #[test]
    fn test_nonzero_target() {
        let mut cd = Countdown::new(5, 3).unwrap();
        assert_eq!(cd.remaining(), 2);
        assert!(!cd.tick());
        assert!(cd.tick());
    }
}
