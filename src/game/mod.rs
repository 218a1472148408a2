//! Game state: the state machine, snapshots, and deterministic RNG.

pub mod rng;
pub mod snapshot;
pub mod state;

pub use rng::{GameRng, GameRngState};
pub use snapshot::{Outcome, Snapshot};
pub use state::{Game, Observer, BOARD_SIZE};
