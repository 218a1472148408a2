//! The card value type and its four attribute domains.
//!
//! A card is one choice from each of four fixed, disjoint domains:
//! color, shape, fill, and count. Two cards with identical attributes
//! are the same card - there are no duplicate printings.
//!
//! Cards render to and parse from the `red-circle-solid-1` name format,
//! which is how diagnostics and test fixtures spell them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// Card symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Diamond,
    Tilde,
}

/// Symbol fill style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Stripe,
    Solid,
    Void,
}

/// Number of symbols on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Count {
    One,
    Two,
    Three,
}

impl Color {
    /// All colors, in universe generation order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];

    /// Name as it appears in card names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

impl Shape {
    /// All shapes, in universe generation order.
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Diamond, Shape::Tilde];

    /// Name as it appears in card names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Diamond => "diamond",
            Shape::Tilde => "tilde",
        }
    }
}

impl Fill {
    /// All fills, in universe generation order.
    pub const ALL: [Fill; 3] = [Fill::Stripe, Fill::Solid, Fill::Void];

    /// Name as it appears in card names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Fill::Stripe => "stripe",
            Fill::Solid => "solid",
            Fill::Void => "void",
        }
    }
}

impl Count {
    /// All counts, in universe generation order.
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Numeric value (1, 2, or 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }
}

/// An immutable card value.
///
/// Compared by attribute equality: two `Card`s with the same four
/// attributes are indistinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub shape: Shape,
    pub fill: Fill,
    pub count: Count,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, fill: Fill, count: Count) -> Self {
        Self { color, shape, fill, count }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.color.name(),
            self.shape.name(),
            self.fill.name(),
            self.count.value()
        )
    }
}

/// Error parsing a card from its `color-shape-fill-count` name.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("invalid card name: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let mut parts = s.split('-');

        let color = match parts.next().ok_or_else(err)? {
            "red" => Color::Red,
            "green" => Color::Green,
            "purple" => Color::Purple,
            _ => return Err(err()),
        };
        let shape = match parts.next().ok_or_else(err)? {
            "circle" => Shape::Circle,
            "diamond" => Shape::Diamond,
            "tilde" => Shape::Tilde,
            _ => return Err(err()),
        };
        let fill = match parts.next().ok_or_else(err)? {
            "stripe" => Fill::Stripe,
            "solid" => Fill::Solid,
            "void" => Fill::Void,
            _ => return Err(err()),
        };
        let count = match parts.next().ok_or_else(err)? {
            "1" => Count::One,
            "2" => Count::Two,
            "3" => Count::Three,
            _ => return Err(err()),
        };

        if parts.next().is_some() {
            return Err(err());
        }

        Ok(Card::new(color, shape, fill, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let card = Card::new(Color::Red, Shape::Circle, Fill::Solid, Count::One);
        assert_eq!(card.to_string(), "red-circle-solid-1");

        let card = Card::new(Color::Purple, Shape::Tilde, Fill::Void, Count::Three);
        assert_eq!(card.to_string(), "purple-tilde-void-3");
    }

    #[test]
    fn test_parse_round_trip() {
        let card: Card = "green-diamond-stripe-2".parse().unwrap();
        assert_eq!(
            card,
            Card::new(Color::Green, Shape::Diamond, Fill::Stripe, Count::Two)
        );
        assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("red-circle-solid".parse::<Card>().is_err());
        assert!("red-circle-solid-4".parse::<Card>().is_err());
        assert!("red-circle-solid-1-x".parse::<Card>().is_err());
        assert!("blue-circle-solid-1".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn test_attribute_equality_is_card_identity() {
        let a = Card::new(Color::Red, Shape::Circle, Fill::Solid, Count::One);
        let b = Card::new(Color::Red, Shape::Circle, Fill::Solid, Count::One);
        let c = Card::new(Color::Red, Shape::Circle, Fill::Solid, Count::Two);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Card::new(Color::Green, Shape::Tilde, Fill::Stripe, Count::Two);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
