//! Set rules: the validity predicate and the brute-force search.
//!
//! Both are pure functions over card lists; the game state machine and
//! the opponent scheduler build on them but they carry no state of
//! their own.

pub mod search;
pub mod validator;

pub use search::{find_all, find_first, find_set, IndexTriple, SearchMode};
pub use validator::is_valid_set;
