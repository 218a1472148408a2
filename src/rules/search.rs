//! Brute-force set search over an ordered card list.
//!
//! Enumerates index triples (i < j < k) in lexicographic order and
//! tests each against the validity predicate. O(n^3) attribute
//! comparisons, which is fine: the board holds 12 cards, and the
//! scheduler's pacing pool at most 15.
//!
//! "First" means first in ascending index order of the input, not any
//! property of the cards themselves. The result is deterministic for a
//! given ordering, but which triple appears first is an implementation
//! detail of that ordering, never a gameplay guarantee.

use serde::{Deserialize, Serialize};

use super::validator::is_valid_set;
use crate::cards::Card;

/// Indices of a valid triple within the searched list, ascending.
pub type IndexTriple = [usize; 3];

/// Search mode for [`find_set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Stop at the first valid triple.
    First,
    /// Collect every valid triple.
    All,
}

/// Find the lexicographically first valid triple, or `None`.
#[must_use]
pub fn find_first(cards: &[Card]) -> Option<IndexTriple> {
    scan(cards, true).into_iter().next()
}

/// Collect every valid index triple.
///
/// Used to estimate how many sets remain findable (scheduler pacing);
/// gameplay correctness only ever needs [`find_first`].
#[must_use]
pub fn find_all(cards: &[Card]) -> Vec<IndexTriple> {
    scan(cards, false)
}

/// Pure search query over an arbitrary card list.
///
/// In [`SearchMode::First`] the result holds at most one triple.
/// Usable by diagnostic and assistive tooling independent of any game
/// state.
#[must_use]
pub fn find_set(cards: &[Card], mode: SearchMode) -> Vec<IndexTriple> {
    scan(cards, mode == SearchMode::First)
}

fn scan(cards: &[Card], stop_at_first: bool) -> Vec<IndexTriple> {
    let mut found = Vec::new();
    let n = cards.len();

    for i in 0..n.saturating_sub(2) {
        for j in (i + 1)..(n - 1) {
            for k in (j + 1)..n {
                if is_valid_set(cards[i], cards[j], cards[k]) {
                    found.push([i, j, k]);
                    if stop_at_first {
                        return found;
                    }
                }
            }
        }
    }

    found
}
