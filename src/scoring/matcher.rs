//! Greedy word alignment between a spoken utterance and a target phrase.
//!
//! # Algorithm
//!
//! ```text
//! pool = target tokens (in order)
//! for each spoken token s:
//!     t = first token in pool with words_match(s, t)
//!     found     → matched.push(t), remove t from pool
//!     not found → unmatched.push(s)
//! unmatched.extend(pool)            ← omitted target words
//! accuracy = round(|matched| / |target| * 100)
//! ```
//!
//! This is a first-match scan, not an optimal bipartite assignment.  When a
//! spoken word is similar to several target words it always claims the
//! leftmost one, which can starve a later spoken word that only matches
//! that same target.  The behaviour is kept as-is because callers rely on
//! the scan order being predictable.

use serde::Serialize;

use crate::scoring::distance::similarity;
use crate::text::approximate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Phonetic keys must be *strictly* more similar than this to match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

/// Outcome of aligning spoken tokens against target tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatchResult {
    /// Integer percentage of target words that were matched (0–100).
    pub accuracy: u32,
    /// Target words that were matched, in the order they were discovered.
    pub matched: Vec<String>,
    /// Spoken words with no match, followed by target words never matched.
    pub unmatched: Vec<String>,
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Word matcher with a configurable phonetic similarity threshold.
///
/// # Example
/// ```rust
/// use voice_tutor::scoring::Matcher;
/// use voice_tutor::text::normalize;
///
/// let matcher = Matcher::default();
/// let target = normalize("Bonjour je voudrais un croissant");
/// let result = matcher.score(&normalize("bonjour"), &target);
///
/// assert_eq!(result.accuracy, 20);
/// assert_eq!(result.matched, ["bonjour"]);
/// assert_eq!(result.unmatched, ["je", "voudrais", "un", "croissant"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    /// Create a matcher that accepts phonetic keys whose similarity is
    /// strictly greater than `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The similarity threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` when `spoken` should count as a correct rendition of
    /// `target`: either verbatim equal, or close enough phonetically.
    pub fn words_match(&self, spoken: &str, target: &str) -> bool {
        if spoken == target {
            return true;
        }
        let spoken_key = approximate(spoken);
        let target_key = approximate(target);
        similarity(&spoken_key, &target_key) > self.threshold
    }

    /// Align `spoken` against `target` and compute the accuracy.
    ///
    /// An empty `target` yields accuracy `0` and empty word lists regardless
    /// of what was spoken.
    pub fn score(&self, spoken: &[String], target: &[String]) -> MatchResult {
        if target.is_empty() {
            return MatchResult::default();
        }

        let mut pool: Vec<&String> = target.iter().collect();
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for word in spoken {
            match pool.iter().position(|t| self.words_match(word, t)) {
                Some(idx) => matched.push(pool.remove(idx).clone()),
                None => unmatched.push(word.clone()),
            }
        }
        unmatched.extend(pool.into_iter().cloned());

        let accuracy = percent(matched.len(), target.len());
        MatchResult {
            accuracy,
            matched,
            unmatched,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

// ---------------------------------------------------------------------------
// Free-function shortcuts (default threshold)
// ---------------------------------------------------------------------------

/// [`Matcher::words_match`] with the default threshold.
pub fn words_match(spoken: &str, target: &str) -> bool {
    Matcher::default().words_match(spoken, target)
}

/// [`Matcher::score`] with the default threshold.
pub fn score(spoken: &[String], target: &[String]) -> MatchResult {
    Matcher::default().score(spoken, target)
}

/// `round(part / whole * 100)` with halves rounded up, in integer math.
fn percent(part: usize, whole: usize) -> u32 {
    ((part * 200 + whole) / (whole * 2)) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
