//! Accuracy-banded feedback text.
//!
//! | Accuracy | Message                                                 |
//! |----------|---------------------------------------------------------|
//! | ≥ 90     | Fixed congratulation                                    |
//! | 75 – 89  | Correct words + up to 2 words to practise               |
//! | 50 – 74  | Up to 3 words to practise + the lesson's grammar point  |
//! | < 50     | Encouragement to listen and repeat slowly               |

use crate::lesson::Lesson;

/// Build the learner-facing feedback sentence for one evaluation.
///
/// ```
/// use voice_tutor::feedback::feedback_message;
/// use voice_tutor::lesson::LessonCatalog;
///
/// let catalog = LessonCatalog::builtin();
/// let lesson = &catalog.lessons()[0];
/// let text = feedback_message(95, &[], &[], lesson);
/// assert!(text.starts_with("Excellent!"));
/// ```
pub fn feedback_message(
    accuracy: u32,
    correct_words: &[String],
    incorrect_words: &[String],
    lesson: &Lesson,
) -> String {
    match accuracy {
        90.. => "Excellent! Votre prononciation est parfaite! 🎉".to_string(),
        75..=89 => format!(
            "Très bien! Correct words: {}. Let's practice: {}",
            correct_words.join(", "),
            first_n(incorrect_words, 2),
        ),
        50..=74 => format!(
            "Bon effort! Focus on these words: {}. Remember: {}",
            first_n(incorrect_words, 3),
            lesson.grammar,
        ),
        _ => "Essayons encore! Listen carefully to the target phrase and repeat slowly."
            .to_string(),
    }
}

fn first_n(words: &[String], n: usize) -> String {
    words[..words.len().min(n)].join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::LessonCatalog;

    fn lesson() -> Lesson {
        LessonCatalog::builtin().lessons()[0].clone()
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn top_band_is_fixed() {
        let a = feedback_message(90, &strings(&["a"]), &strings(&["b"]), &lesson());
        let b = feedback_message(100, &[], &[], &lesson());
        assert_eq!(a, b);
        assert!(a.contains("parfaite"));
    }

    #[test]
    fn good_band_lists_correct_and_two_practice_words() {
        let text = feedback_message(
            80,
            &strings(&["bonjour", "je"]),
            &strings(&["voudrais", "croissant", "café"]),
            &lesson(),
        );
        assert_eq!(
            text,
            "Très bien! Correct words: bonjour, je. Let's practice: voudrais, croissant"
        );
    }

    #[test]
    fn fair_band_lists_three_words_and_grammar() {
        let text = feedback_message(
            60,
            &strings(&["bonjour"]),
            &strings(&["je", "voudrais", "un", "croissant"]),
            &lesson(),
        );
        assert_eq!(
            text,
            "Bon effort! Focus on these words: je, voudrais, un. Remember: Conditional (je voudrais)"
        );
    }

    #[test]
    fn fair_band_with_fewer_words() {
        let text = feedback_message(50, &[], &strings(&["un"]), &lesson());
        assert!(text.starts_with("Bon effort! Focus on these words: un."));
    }

    #[test]
    fn low_band_encourages_retry() {
        let text = feedback_message(49, &[], &strings(&["x"]), &lesson());
        assert!(text.starts_with("Essayons encore!"));
        assert_eq!(text, feedback_message(0, &[], &[], &lesson()));
    }

    #[test]
    fn band_edges() {
        let l = lesson();
        assert!(feedback_message(89, &[], &[], &l).starts_with("Très bien!"));
        assert!(feedback_message(75, &[], &[], &l).starts_with("Très bien!"));
        assert!(feedback_message(74, &[], &[], &l).starts_with("Bon effort!"));
    }
}
