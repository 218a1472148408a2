//! The computer opponent scheduler: countdowns, tuning, and the
//! tick-driven mark/take controller.

pub mod config;
pub mod countdown;
pub mod opponent;

pub use config::{Difficulty, SchedulerConfig};
pub use countdown::{Countdown, SchedulerError};
pub use opponent::OpponentScheduler;
