//! The 81-card universe.
//!
//! One card per point of the 3x3x3x3 attribute space, generated in a
//! fixed nested order (color outer, then shape, fill, count) so that
//! the same generation pass always yields the same sequence.

use super::card::{Card, Color, Count, Fill, Shape};

/// Number of cards in the full universe (3^4 attribute combinations).
pub const UNIVERSE_SIZE: usize = 81;

/// Generate the full card universe in its canonical order.
///
/// Pure and deterministic; called once at new-game initialization.
#[must_use]
pub fn universe() -> Vec<Card> {
    let mut cards = Vec::with_capacity(UNIVERSE_SIZE);
    for color in Color::ALL {
        for shape in Shape::ALL {
            for fill in Fill::ALL {
                for count in Count::ALL {
                    cards.push(Card::new(color, shape, fill, count));
                }
            }
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_universe_has_81_unique_cards() {
        let cards = universe();
        assert_eq!(cards.len(), UNIVERSE_SIZE);

        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), UNIVERSE_SIZE);
    }

    #[test]
    fn test_universe_covers_every_combination() {
        let cards: HashSet<Card> = universe().into_iter().collect();
        for color in Color::ALL {
            for shape in Shape::ALL {
                for fill in Fill::ALL {
                    for count in Count::ALL {
                        assert!(cards.contains(&Card::new(color, shape, fill, count)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_generation_order_is_stable() {
        assert_eq!(universe(), universe());

        // Count varies fastest, color slowest.
        let cards = universe();
        assert_eq!(cards[0].to_string(), "red-circle-stripe-1");
        assert_eq!(cards[1].to_string(), "red-circle-stripe-2");
        assert_eq!(cards[3].to_string(), "red-circle-solid-1");
        assert_eq!(cards[80].to_string(), "purple-tilde-void-3");
    }
}
