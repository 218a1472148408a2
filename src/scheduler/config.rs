//! Scheduler tuning: difficulty levels and timing constants.

use serde::{Deserialize, Serialize};

/// Named difficulty levels, each a base mark wait in ticks.
///
/// One tick is one scheduler time unit; the host decides how long a
/// tick lasts on the wall clock (1 second by default).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    /// Base wait before the computer marks a set, in ticks.
    #[must_use]
    pub const fn base_wait(self) -> u32 {
        match self {
            Difficulty::Easy => 34,
            Difficulty::Medium => 21,
            Difficulty::Hard => 13,
            Difficulty::Impossible => 2,
        }
    }
}

/// Timing knobs for the opponent scheduler.
///
/// Defaults match the tuned constants of the original game; only the
/// base wait normally varies (by difficulty).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Mark-phase wait when plenty of sets remain, in ticks.
    pub base_wait: u32,
    /// Fixed delay between a mark and its take, in ticks.
    pub take_wait: u32,
    /// Grace added to the mark wait after a player score, in ticks.
    pub courtesy_wait: u32,
    /// Below this many findable sets the adaptive wait kicks in.
    pub low_set_threshold: usize,
    /// Penalty term of the adaptive wait (see `next_mark_wait`).
    pub low_set_penalty: u32,
    /// Lower bound on any computed mark wait, in ticks.
    pub floor: u32,
    /// How many upcoming deck draws the pacing estimate looks at.
    pub draw_lookahead: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            base_wait: Difficulty::Medium.base_wait(),
            take_wait: 3,
            courtesy_wait: 3,
            low_set_threshold: 5,
            low_set_penalty: 6,
            floor: 2,
            draw_lookahead: 3,
        }
    }
}

impl SchedulerConfig {
    /// Config for a named difficulty, with default tuning constants.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            base_wait: difficulty.base_wait(),
            ..Self::default()
        }
    }

    /// Override the base wait.
    #[must_use]
    pub fn with_base_wait(mut self, ticks: u32) -> Self {
        self.base_wait = ticks;
        self
    }

    /// Override the take-phase delay.
    #[must_use]
    pub fn with_take_wait(mut self, ticks: u32) -> Self {
        self.take_wait = ticks;
        self
    }

    /// Override the player-courtesy grace.
    #[must_use]
    pub fn with_courtesy_wait(mut self, ticks: u32) -> Self {
        self.courtesy_wait = ticks;
        self
    }

    /// Override the adaptive-wait floor.
    #[must_use]
    pub fn with_floor(mut self, ticks: u32) -> Self {
        self.floor = ticks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_waits() {
        assert_eq!(Difficulty::Easy.base_wait(), 34);
        assert_eq!(Difficulty::Medium.base_wait(), 21);
        assert_eq!(Difficulty::Hard.base_wait(), 13);
        assert_eq!(Difficulty::Impossible.base_wait(), 2);
    }

    #[test]
    fn test_for_difficulty_keeps_tuning_constants() {
        let config = SchedulerConfig::for_difficulty(Difficulty::Hard);
        assert_eq!(config.base_wait, 13);
        assert_eq!(config, SchedulerConfig::default().with_base_wait(13));
    }
}
