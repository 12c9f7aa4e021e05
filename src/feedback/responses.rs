//! Tutor replies: a French phrase plus its English translation.
//!
//! Replies are grouped by [`ResponseCategory`]; each category has three
//! candidates and one is picked through a [`Chooser`].  Production code uses
//! [`RandomChooser`] for variety; tests seed it or supply their own chooser
//! and check membership in [`candidates`].

use std::fmt;

use serde::Serialize;

use crate::lesson::Lesson;
use crate::session::TutorStep;

// ---------------------------------------------------------------------------
// TutorReply
// ---------------------------------------------------------------------------

/// A phrase for the tutor voice to speak, with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorReply {
    /// French text.
    pub phrase: String,
    /// English translation of `phrase`.
    pub translation: String,
}

impl TutorReply {
    pub fn new(phrase: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            translation: translation.into(),
        }
    }

    /// Greeting spoken when a session starts.
    pub fn greeting() -> Self {
        Self::new(
            "Bonjour! Je suis Prof Julia, votre tutrice de français. Commençons par le premier exercice!",
            "Hello! I am Prof Julia, your French tutor. Let's start with the first exercise!",
        )
    }

    /// The lesson's target phrase, as played during the listen step.
    pub fn target(lesson: &Lesson) -> Self {
        Self::new(lesson.target_phrase.clone(), lesson.target_translation())
    }
}

// ---------------------------------------------------------------------------
// ResponseCategory
// ---------------------------------------------------------------------------

/// Quality band used to pick a reply table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseCategory {
    /// Accuracy ≥ 85.
    Excellent,
    /// Accuracy 60 – 84.
    Good,
    /// Accuracy < 60.
    NeedsWork,
}

impl ResponseCategory {
    /// Band for an accuracy percentage.
    ///
    /// ```
    /// use voice_tutor::feedback::ResponseCategory;
    ///
    /// assert_eq!(ResponseCategory::from_accuracy(85), ResponseCategory::Excellent);
    /// assert_eq!(ResponseCategory::from_accuracy(60), ResponseCategory::Good);
    /// assert_eq!(ResponseCategory::from_accuracy(59), ResponseCategory::NeedsWork);
    /// ```
    pub fn from_accuracy(accuracy: u32) -> Self {
        match accuracy {
            85.. => ResponseCategory::Excellent,
            60..=84 => ResponseCategory::Good,
            _ => ResponseCategory::NeedsWork,
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseCategory::Excellent => "excellent",
            ResponseCategory::Good => "good",
            ResponseCategory::NeedsWork => "needsWork",
        };
        f.write_str(name)
    }
}

/// The three candidate replies for `category`.
///
/// Some candidates quote the lesson's target phrase.
pub fn candidates(category: ResponseCategory, lesson: &Lesson) -> [TutorReply; 3] {
    let target = &lesson.target_phrase;
    match category {
        ResponseCategory::Excellent => [
            TutorReply::new(
                "Parfait! Vous maîtrisez très bien cette phrase!",
                "Perfect! You master this phrase very well!",
            ),
            TutorReply::new(
                "Magnifique! Votre accent s'améliore beaucoup!",
                "Magnificent! Your accent is improving a lot!",
            ),
            TutorReply::new(
                "Très bien! Passons au prochain exercice!",
                "Very good! Let's move on to the next exercise!",
            ),
        ],
        ResponseCategory::Good => [
            TutorReply::new(
                format!("Bien! Répétons encore une fois: {target}"),
                format!("Good! Let's repeat once more: {target}"),
            ),
            TutorReply::new(
                format!("Pas mal! Écoutez la prononciation: {target}"),
                format!("Not bad! Listen to the pronunciation: {target}"),
            ),
            TutorReply::new(
                "Bon travail! Essayez de prononcer plus clairement.",
                "Good work! Try to pronounce more clearly.",
            ),
        ],
        ResponseCategory::NeedsWork => [
            TutorReply::new(
                format!("Écoutez attentivement et répétez: {target}"),
                format!("Listen carefully and repeat: {target}"),
            ),
            TutorReply::new(
                format!("Prenez votre temps. Répétez après moi: {target}"),
                format!("Take your time. Repeat after me: {target}"),
            ),
            TutorReply::new(
                "N'hésitez pas! Essayons syllabe par syllabe.",
                "Don't hesitate! Let's try syllable by syllable.",
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Chooser
// ---------------------------------------------------------------------------

/// Picks one index out of `len` candidates.
///
/// Implementations must return a value in `0..len` for any `len > 0`.
pub trait Chooser {
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform random [`Chooser`] backed by `fastrand`.
///
/// By default the seed is random, so replies vary between runs.  Use
/// [`with_seed`](RandomChooser::with_seed) for repeatable selection.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: fastrand::Rng,
}

impl RandomChooser {
    /// Chooser with a random seed.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Chooser with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.usize(..len)
    }
}

/// Pick the tutor's reply for an evaluation.
///
/// `step` is the session step *before* this evaluation is recorded.  All
/// steps currently share the same tables.
pub fn tutor_response<C: Chooser + ?Sized>(
    accuracy: u32,
    lesson: &Lesson,
    step: TutorStep,
    chooser: &mut C,
) -> TutorReply {
    let category = ResponseCategory::from_accuracy(accuracy);
    let options = candidates(category, lesson);
    let idx = chooser.choose(options.len()).min(options.len() - 1);
    log::debug!("Tutor reply: category={category} step={step} choice={idx}");
    options[idx].clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
