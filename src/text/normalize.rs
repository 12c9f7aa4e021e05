//! Transcript normalisation.
//!
//! Speech-to-text output and lesson target phrases go through the same
//! cleaning so that they can be compared word by word:
//!
//! 1. Lowercase.
//! 2. Remove the punctuation characters `. , ! ? ;`.
//! 3. Collapse whitespace runs into a single space and trim both ends.
//!
//! Apostrophes and hyphens are kept, so `s'il` and `excusez-moi` stay single
//! tokens.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Characters removed before tokenizing.
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';'];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Return the cleaned, single-string form of `text`.
///
/// ```
/// use voice_tutor::text::clean;
///
/// assert_eq!(clean("  Bonjour,   Madame ! "), "bonjour madame");
/// ```
pub fn clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` into normalized word tokens.
///
/// Empty or punctuation-only input yields an empty vector.
///
/// ```
/// use voice_tutor::text::normalize;
///
/// let words = normalize("Bonjour, je voudrais un croissant.");
/// assert_eq!(words, ["bonjour", "je", "voudrais", "un", "croissant"]);
/// assert!(normalize("").is_empty());
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    clean(text)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_input() {
        assert_eq!(normalize("BONJOUR Madame"), ["bonjour", "madame"]);
    }

    #[test]
    fn strips_listed_punctuation() {
        assert_eq!(clean("oui. non, si! quoi? bon;"), "oui non si quoi bon");
    }

    #[test]
    fn keeps_apostrophes_and_hyphens() {
        assert_eq!(
            normalize("Excusez-moi, s'il vous plaît."),
            ["excusez-moi", "s'il", "vous", "plaît"]
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(clean("un \t deux\n\n  trois"), "un deux trois");
    }

    #[test]
    fn lowercases_accented_capitals() {
        assert_eq!(normalize("À LA Boulangerie"), ["à", "la", "boulangerie"]);
    }

    #[test]
    fn empty_input_gives_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
    }

    #[test]
    fn punctuation_only_gives_no_tokens() {
        assert!(normalize("?! . ,;").is_empty());
    }

    #[test]
    fn punctuation_between_letters_joins_them() {
        // Removal happens before splitting, so no space is introduced.
        assert_eq!(normalize("un.deux"), ["undeux"]);
    }
}
