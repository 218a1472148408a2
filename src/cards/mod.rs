//! Card model: attribute domains, the `Card` value type, and the
//! 81-card universe.

pub mod card;
pub mod universe;

pub use card::{Card, Color, Count, Fill, ParseCardError, Shape};
pub use universe::{universe, UNIVERSE_SIZE};
