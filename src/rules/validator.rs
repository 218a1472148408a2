//! The set-validity predicate.
//!
//! A triple of cards is a valid set when, for each of the four
//! attributes independently, the three values are either all equal or
//! all distinct. One attribute landing on "exactly two equal" is
//! enough to invalidate the whole triple.

use crate::cards::Card;

/// All-equal or all-distinct check for one attribute across a triple.
fn attribute_ok<T: Eq>(a: T, b: T, c: T) -> bool {
    let all_same = a == b && b == c;
    let all_diff = a != b && a != c && b != c;
    all_same || all_diff
}

/// Decide whether three cards form a valid set.
///
/// Total function with no side effects. Callers must not pass the same
/// card twice: the board/deck disjointness invariant rules duplicates
/// out upstream, and a duplicated card would make its attributes look
/// "all equal" here.
#[must_use]
pub fn is_valid_set(a: Card, b: Card, c: Card) -> bool {
    attribute_ok(a.color, b.color, c.color)
        && attribute_ok(a.shape, b.shape, c.shape)
        && attribute_ok(a.fill, b.fill, c.fill)
        && attribute_ok(a.count, b.count, c.count)
}
