//! The computer opponent's turn-timing controller.
//!
//! Layered strictly above the state machine: it only calls the public
//! mutators, and only when its countdowns expire. The host drives it
//! with `tick`, one logical time unit per call.
//!
//! Two phases:
//! - **Mark**: when the mark countdown expires, claim the first set on
//!   the board. A successful mark arms the take countdown - the take
//!   phase exists only as a consequence of a mark, never as an
//!   independent timer.
//! - **Take**: when the take countdown expires and a 3-card claim is
//!   still pending, resolve it.
//!
//! The mark cadence adapts: after each mark (and after any board
//! reshuffle) the wait is recomputed from how many sets remain
//! findable in the upcoming board. A player score extends the running
//! mark countdown by a courtesy grace. Once the game is over the
//! scheduler goes inert and never scores again.

use log::debug;

use super::config::SchedulerConfig;
use super::countdown::{Countdown, SchedulerError};
use crate::cards::Card;
use crate::game::Game;
use crate::rules::find_all;

/// Tick-driven controller for the computer opponent.
#[derive(Clone, Debug)]
pub struct OpponentScheduler {
    config: SchedulerConfig,
    mark: Countdown,
    /// Armed only by a successful mark.
    take: Option<Countdown>,
    /// Fresh take countdown, validated once at construction.
    take_template: Countdown,
    seen_player_points: u32,
    seen_refresh_count: u32,
    primed: bool,
}

impl OpponentScheduler {
    /// Build a scheduler. Fails fast on an unusable configuration
    /// (zero base wait or zero take wait).
    pub fn new(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        let mark = Countdown::new(config.base_wait, 0)?;
        let take_template = Countdown::new(config.take_wait, 0)?;
        Ok(Self {
            config,
            mark,
            take: None,
            take_template,
            seen_player_points: 0,
            seen_refresh_count: 0,
            primed: false,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Ticks until the next mark attempt.
    #[must_use]
    pub fn mark_remaining(&self) -> u32 {
        self.mark.remaining()
    }

    /// Ticks until the pending take resolves, if one is armed.
    #[must_use]
    pub fn take_remaining(&self) -> Option<u32> {
        self.take.map(|cd| cd.remaining())
    }

    /// Advance one logical time unit against the given game.
    ///
    /// While a take is pending the mark countdown holds, so every
    /// claim is resolved strictly before the next one is made.
    ///
    /// Inert once the game is over: countdowns may still hold state,
    /// but no mutator is invoked and no further points accrue.
    pub fn tick(&mut self, game: &mut Game) {
        if game.is_over() {
            return;
        }

        self.resync(game);

        // Take phase first: an armed take predates this tick's mark
        // countdown and must resolve before a new claim can arise.
        if let Some(take) = self.take.as_mut() {
            if take.tick() {
                self.take = None;
                if game.computer_selection().len() == 3 {
                    // A reshuffle forced by this take is picked up by
                    // the next tick's resync like any other.
                    game.computer_take_set();
                }
            }
        }
        if game.is_over() {
            // The take's review found nothing left to play.
            return;
        }

        // Hold the mark while a claim is pending: the claim's take
        // must resolve before the next claim can arise, however short
        // the mark cadence. Otherwise a mark wait below the take wait
        // would re-claim and re-arm forever, scoring the same set
        // repeatedly and never unlocking the board.
        if self.take.is_none() && self.mark.tick() {
            game.computer_mark_set();
            if game.computer_selection().len() == 3 {
                self.take = Some(self.take_template);
            }
            let wait = self.next_mark_wait(self.findable_sets(game));
            debug!("next mark in {wait} ticks");
            self.mark.restart_from(wait);
        }
    }

    /// The mark wait for a board with `findable` sets remaining.
    ///
    /// At or above the threshold the base wait applies unchanged;
    /// below it, the wait is `penalty - findable + base`, floored at
    /// the configured minimum.
    #[must_use]
    pub fn next_mark_wait(&self, findable: usize) -> u32 {
        if findable >= self.config.low_set_threshold {
            return self.config.base_wait;
        }
        let adjusted = self
            .config
            .base_wait
            .saturating_add(self.config.low_set_penalty.saturating_sub(findable as u32));
        adjusted.max(self.config.floor).max(1)
    }

    /// Count the sets findable in the upcoming board: current board
    /// minus the computer's pending claim, plus the next few cards off
    /// the deck tail - the cards actually in play once the claim
    /// resolves.
    #[must_use]
    pub fn findable_sets(&self, game: &Game) -> usize {
        let claim = game.computer_selection();
        let mut pool: Vec<Card> = game
            .board()
            .iter()
            .copied()
            .filter(|c| !claim.contains(c))
            .collect();
        pool.extend_from_slice(game.upcoming_draws(self.config.draw_lookahead));
        find_all(&pool).len()
    }

    /// Fold externally observed state changes into the timers: a
    /// reshuffle restarts the mark countdown for the new board, and a
    /// player score extends it by the courtesy grace.
    fn resync(&mut self, game: &Game) {
        if !self.primed {
            self.primed = true;
            self.seen_player_points = game.player_points();
            self.seen_refresh_count = game.refresh_count();
            return;
        }

        if game.refresh_count() > self.seen_refresh_count {
            self.seen_refresh_count = game.refresh_count();
            let wait = self.next_mark_wait(self.findable_sets(game));
            debug!("board reshuffled; mark restarts at {wait} ticks");
            self.mark.restart_from(wait);
        }

        // One grace per point, so several scores between ticks all
        // count.
        let scored = game.player_points() - self.seen_player_points;
        if scored > 0 {
            self.seen_player_points = game.player_points();
            self.mark
                .extend(self.config.courtesy_wait.saturating_mul(scored));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::config::Difficulty;

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = SchedulerConfig::default().with_base_wait(0);
        assert!(OpponentScheduler::new(config).is_err());

        let config = SchedulerConfig::default().with_take_wait(0);
        assert!(OpponentScheduler::new(config).is_err());
    }

    #[test]
    fn test_adaptive_wait_matches_rule() {
        let config = SchedulerConfig::default().with_base_wait(20);
        let scheduler = OpponentScheduler::new(config).unwrap();

        // Below the threshold: penalty - findable + base.
        assert_eq!(scheduler.next_mark_wait(3), 6 - 3 + 20);
        assert_eq!(scheduler.next_mark_wait(0), 26);
        assert_eq!(scheduler.next_mark_wait(4), 22);

        // At or above the threshold: base wait unchanged.
        assert_eq!(scheduler.next_mark_wait(5), 20);
        assert_eq!(scheduler.next_mark_wait(40), 20);
    }

    #[test]
    fn test_adaptive_wait_respects_floor() {
        let config = SchedulerConfig::default().with_base_wait(20).with_floor(30);
        let scheduler = OpponentScheduler::new(config).unwrap();

        assert_eq!(scheduler.next_mark_wait(3), 30);
    }

    #[test]
    fn test_difficulty_configs_construct() {
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Impossible,
        ] {
            let config = SchedulerConfig::for_difficulty(difficulty);
            let scheduler = OpponentScheduler::new(config).unwrap();
            assert_eq!(scheduler.mark_remaining(), difficulty.base_wait());
            assert_eq!(scheduler.take_remaining(), None);
        }
    }
}
