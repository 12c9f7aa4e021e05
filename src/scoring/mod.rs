//! Pronunciation scoring: edit distance, word matching and accuracy.
//!
//! * [`levenshtein`] / [`similarity`] — character-level distance metrics.
//! * [`Matcher`] — phonetic word matching and greedy alignment.
//! * [`MatchResult`] — accuracy plus matched / unmatched word lists.

pub mod distance;
pub mod matcher;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use distance::{levenshtein, similarity};
pub use matcher::{score, words_match, MatchResult, Matcher, DEFAULT_SIMILARITY_THRESHOLD};
