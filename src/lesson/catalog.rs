//! Lesson catalog: the three bundled scenarios, or a user-supplied JSON file.
//!
//! A catalog file is a JSON array of [`Lesson`] objects:
//!
//! ```json
//! [
//!   {
//!     "id": "cafe-order",
//!     "title": "Commander au Café",
//!     "scenario": "Order a croissant and coffee",
//!     "targetPhrase": "Bonjour, je voudrais un croissant et un café, s'il vous plaît.",
//!     "vocabulary": ["croissant", "café"],
//!     "grammar": "Conditional (je voudrais)",
//!     "translation": "Hello, I would like a croissant and a coffee, please."
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use super::{Lesson, LessonError};

// ---------------------------------------------------------------------------
// Built-in lessons
// ---------------------------------------------------------------------------

struct BuiltinLesson {
    id: &'static str,
    title: &'static str,
    scenario: &'static str,
    target_phrase: &'static str,
    vocabulary: &'static [&'static str],
    grammar: &'static str,
    translation: &'static str,
}

static BUILTIN: &[BuiltinLesson] = &[
    BuiltinLesson {
        id: "cafe-order",
        title: "Commander au Café",
        scenario: "Order a croissant and coffee",
        target_phrase: "Bonjour, je voudrais un croissant et un café, s'il vous plaît.",
        vocabulary: &["croissant", "café", "s'il vous plaît", "bonjour"],
        grammar: "Conditional (je voudrais)",
        translation: "Hello, I would like a croissant and a coffee, please.",
    },
    BuiltinLesson {
        id: "metro-directions",
        title: "Demander le Chemin",
        scenario: "Ask for directions to the metro",
        target_phrase: "Excusez-moi, où est la station de métro la plus proche?",
        vocabulary: &["excusez-moi", "station", "métro", "proche"],
        grammar: "Question formation (où est...?)",
        translation: "Excuse me, where is the nearest metro station?",
    },
    BuiltinLesson {
        id: "bakery-shopping",
        title: "À la Boulangerie",
        scenario: "Buy bread at the bakery",
        target_phrase: "Une baguette bien cuite, s'il vous plaît.",
        vocabulary: &["baguette", "bien cuite", "boulangerie"],
        grammar: "Adjective agreement (bien cuite)",
        translation: "One well-baked baguette, please.",
    },
];

impl BuiltinLesson {
    fn to_lesson(&self) -> Lesson {
        Lesson {
            id: self.id.into(),
            title: self.title.into(),
            scenario: self.scenario.into(),
            target_phrase: self.target_phrase.into(),
            vocabulary: self.vocabulary.iter().map(|v| v.to_string()).collect(),
            grammar: self.grammar.into(),
            translation: Some(self.translation.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// LessonCatalog
// ---------------------------------------------------------------------------

/// Ordered collection of lessons with unique ids.
///
/// # Example
/// ```rust
/// use voice_tutor::lesson::LessonCatalog;
///
/// let catalog = LessonCatalog::builtin();
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get("bakery-shopping").unwrap().title, "À la Boulangerie");
/// ```
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// The bundled café, metro and bakery scenarios.
    pub fn builtin() -> Self {
        Self {
            lessons: BUILTIN.iter().map(BuiltinLesson::to_lesson).collect(),
        }
    }

    /// Build a catalog from `lessons`, validating each and rejecting
    /// duplicate ids and empty input.
    pub fn from_lessons(lessons: Vec<Lesson>) -> Result<Self, LessonError> {
        if lessons.is_empty() {
            return Err(LessonError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for lesson in &lessons {
            lesson.validate()?;
            if !seen.insert(lesson.id.as_str()) {
                return Err(LessonError::DuplicateId(lesson.id.clone()));
            }
        }
        Ok(Self { lessons })
    }

    /// Load a catalog from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, LessonError> {
        let data = std::fs::read_to_string(path)?;
        let lessons: Vec<Lesson> = serde_json::from_str(&data)?;
        let catalog = Self::from_lessons(lessons)?;
        log::info!(
            "Loaded {} lessons from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load from `path` when given, falling back to the built-in lessons when
    /// the path is absent or the file cannot be used.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load_from(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!(
                    "Failed to load lessons from {} ({e}); using built-in lessons",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All lessons in catalog order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Iterate lessons in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    /// Look up a lesson by id.
    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Position of the lesson with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == id)
    }

    /// Index of the lesson after `index`, wrapping to the first.
    pub fn next_after(&self, index: usize) -> usize {
        (index + 1) % self.lessons.len()
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Returns `true` when the catalog has no lessons.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
