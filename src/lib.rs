//! # set-duel
//!
//! Rules engine and turn-timing controller for the Set card-matching
//! game: 81 cards over four 3-value attributes, where a valid set is
//! three cards that are all-equal or all-distinct in every attribute,
//! and a timer-driven computer opponent competes with the player for
//! them.
//!
//! ## Design Principles
//!
//! 1. **Pure rules, owned state**: validity and search are pure
//!    functions; all mutation lives in one state machine whose
//!    mutators apply atomically and notify observers exactly once.
//!
//! 2. **Deterministic replays**: every shuffle goes through a seeded
//!    RNG, so the same seed and the same mutator sequence reproduce
//!    identical snapshot sequences.
//!
//! 3. **Scheduler on top, not inside**: the opponent is a tick-driven
//!    controller that only calls the machine's public mutators. One
//!    tick is one logical time unit; the host maps ticks to the wall
//!    clock.
//!
//! ## Modules
//!
//! - `cards`: attribute domains, the `Card` value, the 81-card universe
//! - `rules`: set validity and brute-force search
//! - `game`: the state machine, snapshots, deterministic RNG
//! - `scheduler`: countdowns, difficulty tuning, the opponent controller

pub mod cards;
pub mod game;
pub mod rules;
pub mod scheduler;

// Re-export commonly used types
pub use crate::cards::{universe, Card, Color, Count, Fill, ParseCardError, Shape, UNIVERSE_SIZE};

pub use crate::rules::{find_all, find_first, find_set, is_valid_set, IndexTriple, SearchMode};

pub use crate::game::{Game, GameRng, GameRngState, Outcome, Snapshot, BOARD_SIZE};

pub use crate::scheduler::{
    Countdown, Difficulty, OpponentScheduler, SchedulerConfig, SchedulerError,
};
