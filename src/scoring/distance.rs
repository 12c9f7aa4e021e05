//! Character-level edit distance and normalized similarity.
//!
//! Both functions operate on Unicode scalar values, so `é` counts as one
//! character.

/// Levenshtein distance between `a` and `b` with unit insertion, deletion
/// and substitution costs.
///
/// The whole dynamic-programming table is filled; there is no early exit
/// for distances above a bound.
///
/// ```
/// use voice_tutor::scoring::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two rolling rows of the (|a|+1) x (|b|+1) table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized similarity in `[0, 1]`: `(maxLen - distance) / maxLen`.
///
/// Two empty strings are identical and score `1.0`.
///
/// ```
/// use voice_tutor::scoring::similarity;
///
/// assert_eq!(similarity("", ""), 1.0);
/// assert_eq!(similarity("cafe", "caff"), 0.75);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
