//! Rule-based phonetic approximation for French words.
//!
//! [`approximate`] maps a normalized word to a coarse "sounds like" key by
//! running a fixed rule table in order.  Each rule sees the output of the
//! previous one, so `chats` first loses its silent `s`, then its silent `t`,
//! and only then has `ch` rewritten to `sh`.
//!
//! The table is intentionally small: it models the silent endings and
//! letter groups that English-speaking learners most often mispronounce
//! rather than attempting real grapheme-to-phoneme conversion.

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

enum Rule {
    /// Remove one trailing occurrence of the character.
    DropTrailing(char),
    /// Replace every occurrence of any of `from` with `to`.
    Replace {
        from: &'static [&'static str],
        to: &'static str,
    },
}

static RULES: &[Rule] = &[
    // Silent endings
    Rule::DropTrailing('e'),
    Rule::DropTrailing('s'),
    Rule::DropTrailing('t'),
    // Letter groups
    Rule::Replace { from: &["qu"], to: "k" },
    Rule::Replace { from: &["ch"], to: "sh" },
    Rule::Replace { from: &["j"], to: "zh" },
    Rule::Replace { from: &["gn"], to: "ny" },
    Rule::Replace { from: &["ç"], to: "s" },
    // Accent folding
    Rule::Replace { from: &["é", "è", "ê", "ë"], to: "e" },
    Rule::Replace { from: &["à", "â", "ä"], to: "a" },
    Rule::Replace { from: &["ô", "ö"], to: "o" },
    Rule::Replace { from: &["ù", "û", "ü"], to: "u" },
];

impl Rule {
    fn apply(&self, word: String) -> String {
        match self {
            Rule::DropTrailing(c) => {
                let mut word = word;
                if word.ends_with(*c) {
                    word.pop();
                }
                word
            }
            Rule::Replace { from, to } => from
                .iter()
                .fold(word, |acc, pattern| acc.replace(pattern, to)),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the phonetic key of `word`.
///
/// ```
/// use voice_tutor::text::approximate;
///
/// assert_eq!(approximate("croissant"), "croissan");
/// assert_eq!(approximate("chats"), "sha");
/// assert_eq!(approximate("métro"), "metro");
/// ```
pub fn approximate(word: &str) -> String {
    RULES
        .iter()
        .fold(word.to_string(), |acc, rule| rule.apply(acc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
