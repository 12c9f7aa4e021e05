//! Text preparation for scoring.
//!
//! * [`normalize`] / [`clean`] — lowercase, strip punctuation, tokenize.
//! * [`approximate`] — coarse French phonetic key used by the matcher.
//!
//! Both stages are pure and total: every input string produces a result.

pub mod normalize;
pub mod phonetic;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use normalize::{clean, normalize};
pub use phonetic::approximate;
