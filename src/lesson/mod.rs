//! Lesson descriptors and the bundled scenario catalog.
//!
//! * [`Lesson`] — one practice scenario with its target phrase.
//! * [`LessonCatalog`] — ordered, id-unique collection of lessons, either
//!   the built-in set or loaded from a JSON file.
//! * [`LessonError`] — validation and loading failures.

pub mod catalog;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::LessonCatalog;

// ---------------------------------------------------------------------------
// LessonError
// ---------------------------------------------------------------------------

/// Errors raised while validating or loading lessons.
#[derive(Debug, Error)]
pub enum LessonError {
    /// The lesson has no scorable words in its target phrase.
    #[error("lesson '{0}' has no target phrase")]
    MissingTargetPhrase(String),

    /// Two lessons in one catalog share an id.
    #[error("duplicate lesson id '{0}'")]
    DuplicateId(String),

    /// A catalog file contained no lessons.
    #[error("lesson catalog is empty")]
    EmptyCatalog,

    /// The catalog file could not be read.
    #[error("failed to read lesson catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid JSON lesson array.
    #[error("failed to parse lesson catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Lesson
// ---------------------------------------------------------------------------

/// A single practice scenario.
///
/// Lessons are immutable once built and are passed by reference into every
/// evaluation.  Field names serialise in camelCase so catalogs can be shared
/// with web front-ends unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Stable identifier, e.g. `"cafe-order"`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description of the situation being practised.
    pub scenario: String,
    /// The phrase the learner is asked to say.
    pub target_phrase: String,
    /// Key vocabulary, in teaching order.
    #[serde(default)]
    pub vocabulary: Vec<String>,
    /// Grammar point highlighted by this lesson.
    pub grammar: String,
    /// English translation of `target_phrase`, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl Lesson {
    /// Check that the lesson can be scored meaningfully.
    ///
    /// The engine itself never fails on an empty target (it reports 0 %),
    /// so this is for callers that prefer to reject such lessons up front.
    ///
    /// ```
    /// use voice_tutor::lesson::LessonCatalog;
    ///
    /// let mut lesson = LessonCatalog::builtin().lessons()[0].clone();
    /// assert!(lesson.validate().is_ok());
    ///
    /// lesson.target_phrase = " ?! ".into();
    /// assert!(lesson.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), LessonError> {
        if crate::text::normalize(&self.target_phrase).is_empty() {
            return Err(LessonError::MissingTargetPhrase(self.id.clone()));
        }
        Ok(())
    }

    /// English rendering of the target phrase, or a placeholder naming the
    /// phrase when no translation is recorded.
    pub fn target_translation(&self) -> String {
        match &self.translation {
            Some(t) => t.clone(),
            None => format!("Translation for: {}", self.target_phrase),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(target: &str) -> Lesson {
        Lesson {
            id: "test".into(),
            title: "Test".into(),
            scenario: "Testing".into(),
            target_phrase: target.into(),
            vocabulary: vec![],
            grammar: "Present tense".into(),
            translation: None,
        }
    }

    #[test]
    fn validate_accepts_real_phrase() {
        assert!(lesson("Bonjour!").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_phrase() {
        let err = lesson("").validate().unwrap_err();
        assert!(matches!(err, LessonError::MissingTargetPhrase(id) if id == "test"));
    }

    #[test]
    fn validate_rejects_punctuation_only_phrase() {
        assert!(lesson("...").validate().is_err());
    }

    #[test]
    fn translation_falls_back_to_placeholder() {
        assert_eq!(
            lesson("Merci.").target_translation(),
            "Translation for: Merci."
        );
    }

    #[test]
    fn translation_uses_recorded_value() {
        let mut l = lesson("Merci.");
        l.translation = Some("Thank you.".into());
        assert_eq!(l.target_translation(), "Thank you.");
    }

    #[test]
    fn serialises_in_camel_case() {
        let json = serde_json::to_string(&lesson("Oui.")).unwrap();
        assert!(json.contains("\"targetPhrase\":\"Oui.\""));
        assert!(!json.contains("translation"));
    }
}
