//! The game state machine.
//!
//! `Game` owns the deck, board, both selections, and every counter and
//! flag. All mutation goes through the public mutators (`select`,
//! `refresh`, `computer_mark_set`, `computer_take_set`), each of which
//! applies atomically and then notifies subscribed observers exactly
//! once with a fresh [`Snapshot`].
//!
//! ## Invariants
//!
//! After every completed mutator:
//! - the board holds 12 cards, unless deck exhaustion shrank it or the
//!   game is over;
//! - deck, board, and the two selections are pairwise disjoint;
//! - if the game is not over, the board contains at least one valid
//!   triple (`review_board` repairs or terminates);
//! - `is_over` never reverts to false.
//!
//! ## Locking
//!
//! While `locked` is true the hosting input layer must reject
//! `select` calls. The machine itself does not refuse them, so tests
//! can drive it without simulating a lock-respecting caller.

use log::{debug, warn};
use smallvec::SmallVec;
use std::fmt;

use super::rng::GameRng;
use super::snapshot::{Outcome, Snapshot};
use crate::cards::{universe, Card};
use crate::rules::{find_first, is_valid_set};

/// Board size whenever the deck can still refill it.
pub const BOARD_SIZE: usize = 12;

/// Observer callback, invoked synchronously after each mutator.
pub type Observer = Box<dyn FnMut(&Snapshot)>;

/// Selection storage: 0-3 cards, inline.
type Selection = SmallVec<[Card; 3]>;

/// The deck/board/score state machine for one game.
pub struct Game {
    deck: Vec<Card>,
    board: Vec<Card>,
    player_selection: Selection,
    computer_selection: Selection,
    player_points: u32,
    computer_points: u32,
    player_miss: u32,
    refresh_count: u32,
    locked: bool,
    is_over: bool,
    rng: GameRng,
    observers: Vec<Observer>,
}

impl Game {
    /// Start a new game: shuffle the 81-card universe, deal 12 to the
    /// board, and reshuffle the combined pool until the board contains
    /// a valid triple.
    ///
    /// A setless opening deal is rare but real, and one reshuffle is
    /// not guaranteed to fix it, so this loops. Reshuffles here count
    /// toward `refresh_count` like any other.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut pool = universe();
        rng.shuffle(&mut pool);

        let deck = pool.split_off(BOARD_SIZE);
        let mut game = Self::from_parts(pool, deck, rng);

        while find_first(&game.board).is_none() {
            game.refresh_pool();
        }

        game
    }

    /// Deal an exact position without the opening review loop.
    ///
    /// For diagnostics and test fixtures: the given board and deck are
    /// used verbatim, however unplayable. The seed only matters for
    /// whatever reshuffles happen later.
    #[must_use]
    pub fn with_setup(board: Vec<Card>, deck: Vec<Card>, seed: u64) -> Self {
        Self::from_parts(board, deck, GameRng::new(seed))
    }

    fn from_parts(board: Vec<Card>, deck: Vec<Card>, rng: GameRng) -> Self {
        Self {
            deck,
            board,
            player_selection: Selection::new(),
            computer_selection: Selection::new(),
            player_points: 0,
            computer_points: 0,
            player_miss: 0,
            refresh_count: 0,
            locked: false,
            is_over: false,
            rng,
            observers: Vec::new(),
        }
    }

    // === Observation ===

    /// Register a callback invoked synchronously after each mutator.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Build a read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            deck_size: self.deck.len(),
            player_selection: self.player_selection.clone(),
            computer_selection: self.computer_selection.clone(),
            player_points: self.player_points,
            computer_points: self.computer_points,
            player_miss: self.player_miss,
            refresh_count: self.refresh_count,
            locked: self.locked,
            is_over: self.is_over,
        }
    }

    /// Face-up cards, in display order.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The next up-to-`n` cards that would be drawn, in no promised
    /// order. Exposed for the scheduler's pacing estimate.
    #[must_use]
    pub fn upcoming_draws(&self, n: usize) -> &[Card] {
        &self.deck[self.deck.len().saturating_sub(n)..]
    }

    /// Player's in-progress selection.
    #[must_use]
    pub fn player_selection(&self) -> &[Card] {
        &self.player_selection
    }

    /// Computer's pending claim (empty or exactly 3 cards).
    #[must_use]
    pub fn computer_selection(&self) -> &[Card] {
        &self.computer_selection
    }

    /// Sets the player has matched.
    #[must_use]
    pub fn player_points(&self) -> u32 {
        self.player_points
    }

    /// Sets the computer has marked.
    #[must_use]
    pub fn computer_points(&self) -> u32 {
        self.computer_points
    }

    /// Failed 3-card attempts by the player.
    #[must_use]
    pub fn player_miss(&self) -> u32 {
        self.player_miss
    }

    /// Reshuffles so far, forced and manual.
    #[must_use]
    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    /// True while a computer claim pends (player input suppressed).
    #[must_use]
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// True once no valid triple remains anywhere. Irreversible.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Final outcome, or `None` while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over
            .then(|| Outcome::from_points(self.player_points, self.computer_points))
    }

    /// Whether the board alone contains a valid triple.
    #[must_use]
    pub fn has_set_on_board(&self) -> bool {
        find_first(&self.board).is_some()
    }

    /// Whether deck and board combined contain a valid triple.
    #[must_use]
    pub fn has_set_in_game(&self) -> bool {
        find_first(&self.pool()).is_some()
    }

    /// Saved RNG state, for checkpointing alongside a snapshot.
    #[must_use]
    pub fn rng_state(&self) -> super::rng::GameRngState {
        self.rng.state()
    }

    // === Mutators ===

    /// Toggle a card in the player's selection; resolve on the third.
    ///
    /// - Already selected: deselect, nothing else.
    /// - Fewer than 3 selected: append. On reaching 3, a valid triple
    ///   scores a point and each selected card still on the board is
    ///   replaced from the deck tail (or its slot removed when the
    ///   deck is empty); an invalid triple counts a miss. Either way
    ///   the selection clears and the board is reviewed.
    ///
    /// A 3-card selection never survives a mutator, so a 4th distinct
    /// card can only arrive through caller error; it degrades to a
    /// no-op.
    pub fn select(&mut self, card: Card) {
        if let Some(pos) = self.player_selection.iter().position(|&c| c == card) {
            self.player_selection.remove(pos);
            self.notify();
            return;
        }

        if self.player_selection.len() >= 3 {
            warn!("select({card}) with 3 cards already pending; ignoring");
            self.notify();
            return;
        }

        self.player_selection.push(card);
        if self.player_selection.len() == 3 {
            let (a, b, c) = (
                self.player_selection[0],
                self.player_selection[1],
                self.player_selection[2],
            );
            if is_valid_set(a, b, c) {
                debug!("player matched {a} {b} {c}");
                self.player_points += 1;
                let matched = self.player_selection.clone();
                self.replace_or_shrink(&matched);
            } else {
                debug!("player missed with {a} {b} {c}");
                self.player_miss += 1;
            }
            self.player_selection.clear();
            self.review_board();
        }

        self.notify();
    }

    /// Reshuffle deck and board together and redeal.
    ///
    /// The redealt board is reviewed, so the playability invariant
    /// holds when this returns (possibly via further reshuffles, or by
    /// ending the game).
    pub fn refresh(&mut self) {
        self.refresh_pool();
        self.review_board();
        self.notify();
    }

    /// Claim the first valid triple on the board for the computer.
    ///
    /// Scores at mark time, not take time: the point reflects
    /// detection. Claimed cards are stripped from the player's
    /// in-progress selection so it cannot dangle, and the board locks
    /// until the claim resolves. Silently a no-op when the board has
    /// no set (unreachable while the review invariant holds).
    pub fn computer_mark_set(&mut self) {
        let Some(indexes) = find_first(&self.board) else {
            warn!("computer_mark_set on a setless board; ignoring");
            self.notify();
            return;
        };

        self.computer_selection = indexes.iter().map(|&i| self.board[i]).collect();
        let claim = self.computer_selection.clone();
        self.player_selection.retain(|c| !claim.contains(c));
        self.computer_points += 1;
        self.locked = true;
        self.notify();
    }

    /// Resolve a pending computer claim: remove the claimed cards,
    /// refill from the deck tail, unlock, and review.
    ///
    /// Re-checks validity defensively and no-ops on anything but a
    /// valid 3-card claim. The unlock happens before the review, so a
    /// terminal review's lock sticks.
    pub fn computer_take_set(&mut self) {
        let valid = match *self.computer_selection.as_slice() {
            [a, b, c] => is_valid_set(a, b, c),
            _ => false,
        };
        if !valid {
            warn!("computer_take_set without a valid pending claim; ignoring");
            self.notify();
            return;
        }

        let claim = std::mem::take(&mut self.computer_selection);
        self.replace_or_shrink(&claim);
        self.locked = false;
        self.review_board();
        self.notify();
    }

    // === Internals ===

    /// Certify playability after a board mutation.
    ///
    /// Terminal check first: when deck and board combined hold no
    /// valid triple, the game ends (locked, player selection cleared).
    /// Otherwise reshuffle the combined pool until the board alone has
    /// a triple. Works on boards of any size, including sub-12 boards
    /// left behind by deck exhaustion.
    fn review_board(&mut self) {
        if find_first(&self.pool()).is_none() {
            debug!("no set remains anywhere; game over");
            self.is_over = true;
            self.locked = true;
            self.player_selection.clear();
            return;
        }

        while find_first(&self.board).is_none() {
            // A reshuffle can strand selected cards in the deck.
            self.player_selection.clear();
            self.refresh_pool();
        }
    }

    /// Reshuffle deck and board combined, redeal up to 12.
    fn refresh_pool(&mut self) {
        let mut pool = self.pool();
        self.rng.shuffle(&mut pool);

        let cut = pool.len().min(BOARD_SIZE);
        self.deck = pool.split_off(cut);
        self.board = pool;
        self.refresh_count += 1;
    }

    /// Replace each matched card still on the board with a draw from
    /// the deck tail; with an empty deck the slot is removed instead,
    /// shrinking the board permanently.
    fn replace_or_shrink(&mut self, matched: &[Card]) {
        let mut rebuilt = Vec::with_capacity(self.board.len());
        for card in self.board.drain(..) {
            if matched.contains(&card) {
                if let Some(drawn) = self.deck.pop() {
                    rebuilt.push(drawn);
                }
            } else {
                rebuilt.push(card);
            }
        }
        self.board = rebuilt;
    }

    /// Deck and board as one list, deck first (search scans it in
    /// this order).
    fn pool(&self) -> Vec<Card> {
        self.deck.iter().chain(self.board.iter()).copied().collect()
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("deck", &self.deck.len())
            .field("board", &self.board)
            .field("player_selection", &self.player_selection)
            .field("computer_selection", &self.computer_selection)
            .field("player_points", &self.player_points)
            .field("computer_points", &self.computer_points)
            .field("player_miss", &self.player_miss)
            .field("refresh_count", &self.refresh_count)
            .field("locked", &self.locked)
            .field("is_over", &self.is_over)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deals_a_playable_board() {
        for seed in 0..20 {
            let game = Game::new(seed);
            assert_eq!(game.board().len(), BOARD_SIZE);
            assert_eq!(game.deck_len() + BOARD_SIZE, 81);
            assert!(game.has_set_on_board(), "seed {seed} dealt a setless board");
            assert!(!game.is_over());
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Game::new(7);
        let b = Game::new(7);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.refresh_count(), b.refresh_count());
    }

    #[test]
    fn test_deselect_toggles() {
        let mut game = Game::new(3);
        let card = game.board()[0];

        game.select(card);
        assert_eq!(game.player_selection(), &[card]);

        game.select(card);
        assert!(game.player_selection().is_empty());
        assert_eq!(game.player_points() + game.player_miss(), 0);
    }

    #[test]
    fn test_upcoming_draws_clamps_to_deck() {
        let board = vec!["red-circle-solid-1".parse().unwrap()];
        let deck = vec![
            "green-circle-solid-1".parse().unwrap(),
            "purple-circle-solid-1".parse().unwrap(),
        ];
        let game = Game::with_setup(board, deck.clone(), 0);

        assert_eq!(game.upcoming_draws(3), &deck[..]);
        assert_eq!(game.upcoming_draws(1), &deck[1..]);
        assert_eq!(game.upcoming_draws(0), &[] as &[Card]);
    }
}
