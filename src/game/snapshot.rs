//! Read-only state snapshots published to consumers.
//!
//! A `Snapshot` is a value: observers receive one after every mutator
//! call and must never try to write back through it. Deck contents stay
//! hidden - only the remaining count is published.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player scored more points than the computer.
    PlayerWins,
    /// Computer scored more points than the player.
    ComputerWins,
    /// Equal points.
    Tie,
}

impl Outcome {
    /// Decide the outcome from the two point totals.
    #[must_use]
    pub fn from_points(player_points: u32, computer_points: u32) -> Self {
        match player_points.cmp(&computer_points) {
            std::cmp::Ordering::Greater => Outcome::PlayerWins,
            std::cmp::Ordering::Less => Outcome::ComputerWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Published game state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Face-up cards, in display order.
    pub board: Vec<Card>,
    /// Cards remaining face-down. Contents are hidden information.
    pub deck_size: usize,
    /// Player's in-progress selection (0-3 cards).
    pub player_selection: SmallVec<[Card; 3]>,
    /// Computer's pending claim (empty or exactly 3 cards).
    pub computer_selection: SmallVec<[Card; 3]>,
    /// Sets the player has matched.
    pub player_points: u32,
    /// Sets the computer has marked.
    pub computer_points: u32,
    /// Failed 3-card attempts by the player.
    pub player_miss: u32,
    /// Forced and manual reshuffles so far.
    pub refresh_count: u32,
    /// Player input must be suppressed while a computer claim pends.
    pub locked: bool,
    /// Terminal: no valid triple remains anywhere. Never reverts.
    pub is_over: bool,
}

impl Snapshot {
    /// Final outcome, or `None` while the game is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over
            .then(|| Outcome::from_points(self.player_points, self.computer_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_points() {
        assert_eq!(Outcome::from_points(3, 1), Outcome::PlayerWins);
        assert_eq!(Outcome::from_points(1, 3), Outcome::ComputerWins);
        assert_eq!(Outcome::from_points(2, 2), Outcome::Tie);
    }
}
