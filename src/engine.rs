//! The pronunciation scoring engine.
//!
//! [`TutorEngine::analyze_user_speech`] chains every stage for one learner
//! utterance:
//!
//! ```text
//! transcript ─▶ normalize ─┐
//!                          ├─▶ Matcher::score ─▶ feedback_message
//! target     ─▶ normalize ─┘          │        ─▶ tutor_response (Chooser)
//!                                     │        ─▶ suggestions
//!                                     ▼
//!                             TutorSession::record
//! ```
//!
//! # Concurrency
//!
//! Scoring is synchronous and never blocks.  Evaluations take `&mut self`,
//! so at most one can be in flight per engine; callers that share an engine
//! across threads wrap it in `Arc<Mutex<TutorEngine>>`.

use crate::config::EngineConfig;
use crate::feedback::{
    analyze_politeness, feedback_message, suggestions, tutor_response, Chooser, PolitenessReport,
    PronunciationFeedback, RandomChooser, TutorReply,
};
use crate::lesson::Lesson;
use crate::scoring::{MatchResult, Matcher};
use crate::session::TutorSession;
use crate::text::normalize;

// ---------------------------------------------------------------------------
// TutorEngine
// ---------------------------------------------------------------------------

/// Scores learner utterances and tracks their session progress.
///
/// # Example
/// ```rust
/// use voice_tutor::engine::TutorEngine;
/// use voice_tutor::lesson::LessonCatalog;
/// use voice_tutor::session::TutorStep;
///
/// let catalog = LessonCatalog::builtin();
/// let lesson = catalog.get("bakery-shopping").unwrap();
///
/// let mut engine = TutorEngine::new();
/// let result = engine.analyze_user_speech("Une baguette bien cuite, s'il vous plaît", lesson);
///
/// assert_eq!(result.accuracy, 100);
/// assert!(result.incorrect_words.is_empty());
/// assert_eq!(engine.session().current_step, TutorStep::Repeat);
/// ```
pub struct TutorEngine<C: Chooser = RandomChooser> {
    matcher: Matcher,
    suggestion_word_limit: usize,
    session: TutorSession,
    chooser: C,
}

impl TutorEngine<RandomChooser> {
    /// Engine with default settings and a randomly seeded reply chooser.
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Engine configured from the `[engine]` settings section.
    ///
    /// A configured `seed` makes tutor replies repeatable.
    pub fn from_config(config: &EngineConfig) -> Self {
        let chooser = match config.seed {
            Some(seed) => RandomChooser::with_seed(seed),
            None => RandomChooser::new(),
        };
        Self::with_chooser(config, chooser)
    }
}

impl Default for TutorEngine<RandomChooser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chooser> TutorEngine<C> {
    /// Engine that selects tutor replies through `chooser`.
    pub fn with_chooser(config: &EngineConfig, chooser: C) -> Self {
        Self {
            matcher: Matcher::new(config.similarity_threshold),
            suggestion_word_limit: config.suggestion_word_limit,
            session: TutorSession::with_threshold(config.advance_threshold),
            chooser,
        }
    }

    // -----------------------------------------------------------------------
    // Evaluation
    // -----------------------------------------------------------------------

    /// Score `transcript` against `lesson`, build feedback and record the
    /// attempt in the session.
    ///
    /// Never fails: a lesson without a usable target phrase scores 0 %.
    /// The tutor reply is chosen for the step the learner was on *before*
    /// this attempt.
    pub fn analyze_user_speech(&mut self, transcript: &str, lesson: &Lesson) -> PronunciationFeedback {
        let MatchResult {
            accuracy,
            matched,
            unmatched,
        } = self.score(transcript, lesson);

        let feedback = feedback_message(accuracy, &matched, &unmatched, lesson);
        let tutor_response = tutor_response(
            accuracy,
            lesson,
            self.session.current_step,
            &mut self.chooser,
        );
        let suggestions = suggestions(&unmatched, self.suggestion_word_limit);

        log::debug!(
            "Scored lesson '{}': accuracy={accuracy} matched={} unmatched={}",
            lesson.id,
            matched.len(),
            unmatched.len()
        );
        self.session.record(accuracy);

        PronunciationFeedback {
            accuracy,
            correct_words: matched,
            incorrect_words: unmatched,
            feedback,
            tutor_response,
            suggestions,
        }
    }

    /// Score `transcript` against `lesson` without touching the session.
    pub fn score(&self, transcript: &str, lesson: &Lesson) -> MatchResult {
        let spoken = normalize(transcript);
        let target = normalize(&lesson.target_phrase);
        if target.is_empty() {
            log::warn!("Lesson '{}' has an empty target phrase", lesson.id);
        }
        self.matcher.score(&spoken, &target)
    }

    /// Classify the tu / vous register of `text`.
    pub fn analyze_politeness(&self, text: &str) -> PolitenessReport {
        analyze_politeness(text)
    }

    /// Opening line of a session.
    pub fn greeting(&self) -> TutorReply {
        TutorReply::greeting()
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Current session progress.
    pub fn session(&self) -> &TutorSession {
        &self.session
    }

    /// Restore the session to its initial state.
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    /// Mark a lesson as completed.  Returns `false` if it already was.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        self.session.complete_lesson(lesson_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
