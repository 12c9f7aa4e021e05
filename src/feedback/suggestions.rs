//! Targeted pronunciation tips for mispronounced words.

/// How many incorrect words are considered by default.
pub const DEFAULT_SUGGESTION_WORD_LIMIT: usize = 3;

struct Tip {
    /// Substring that triggers the tip.
    trigger: &'static str,
    /// Advice appended after `For '<word>': `.
    advice: &'static str,
}

static TIPS: &[Tip] = &[
    Tip {
        trigger: "r",
        advice: "Practice the French 'R' sound from the back of your throat",
    },
    Tip {
        trigger: "u",
        advice: "French 'u' is pronounced with rounded lips, like 'ü'",
    },
    Tip {
        trigger: "j",
        advice: "French 'j' sounds like 'zh' in 'measure'",
    },
    Tip {
        trigger: "ch",
        advice: "French 'ch' sounds like 'sh' in 'shoe'",
    },
];

/// Tips for the first `limit` incorrect words, in word order.
///
/// Every tip whose trigger occurs in a word is emitted, so one word can
/// produce several lines.
///
/// ```
/// use voice_tutor::feedback::suggestions;
///
/// let tips = suggestions(&["chaud".to_string()], 3);
/// assert_eq!(tips.len(), 2); // 'u' and 'ch'
/// ```
pub fn suggestions(incorrect_words: &[String], limit: usize) -> Vec<String> {
    incorrect_words
        .iter()
        .take(limit)
        .flat_map(|word| {
            TIPS.iter()
                .filter(|tip| word.contains(tip.trigger))
                .map(move |tip| format!("For '{word}': {}", tip.advice))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn chaud_triggers_u_and_ch_tips() {
        let tips = suggestions(&strings(&["chaud"]), DEFAULT_SUGGESTION_WORD_LIMIT);
        assert_eq!(
            tips,
            [
                "For 'chaud': French 'u' is pronounced with rounded lips, like 'ü'",
                "For 'chaud': French 'ch' sounds like 'sh' in 'shoe'",
            ]
        );
    }

    #[test]
    fn one_word_can_trigger_every_tip() {
        let tips = suggestions(&strings(&["jurch"]), DEFAULT_SUGGESTION_WORD_LIMIT);
        assert_eq!(tips.len(), 4);
    }

    #[test]
    fn words_without_triggers_give_nothing() {
        assert!(suggestions(&strings(&["café", "est"]), 3).is_empty());
        let tips = suggestions(&strings(&["café", "un"]), 3);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].starts_with("For 'un'"));
    }

    #[test]
    fn only_first_three_words_are_considered() {
        let words = strings(&["bonjour", "vous", "café", "croissant", "chaud"]);
        let tips = suggestions(&words, DEFAULT_SUGGESTION_WORD_LIMIT);
        assert!(tips.iter().all(|t| !t.contains("croissant") && !t.contains("chaud")));
        assert_eq!(
            tips,
            [
                "For 'bonjour': Practice the French 'R' sound from the back of your throat",
                "For 'bonjour': French 'u' is pronounced with rounded lips, like 'ü'",
                "For 'bonjour': French 'j' sounds like 'zh' in 'measure'",
                "For 'vous': French 'u' is pronounced with rounded lips, like 'ü'",
            ]
        );
    }

    #[test]
    fn order_follows_input_words() {
        let tips = suggestions(&strings(&["rue", "jour"]), 3);
        assert!(tips[0].starts_with("For 'rue'"));
        assert!(tips.last().unwrap().starts_with("For 'jour'"));
    }

    #[test]
    fn empty_input() {
        assert!(suggestions(&[], 3).is_empty());
    }
}
