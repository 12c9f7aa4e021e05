//! Learner feedback generation.
//!
//! This module provides:
//! * [`feedback_message`] — accuracy-banded feedback sentence.
//! * [`tutor_response`] — tutor reply drawn from a [`ResponseCategory`]
//!   table through a [`Chooser`].
//! * [`suggestions`] — per-word pronunciation tips.
//! * [`analyze_politeness`] — tu / vous register detection.
//! * [`PronunciationFeedback`] — the complete result of one evaluation.

pub mod messages;
pub mod politeness;
pub mod responses;
pub mod suggestions;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use messages::feedback_message;
pub use politeness::{analyze_politeness, PolitenessLevel, PolitenessReport};
pub use responses::{
    candidates, tutor_response, Chooser, RandomChooser, ResponseCategory, TutorReply,
};
pub use suggestions::{suggestions, DEFAULT_SUGGESTION_WORD_LIMIT};

// ---------------------------------------------------------------------------
// PronunciationFeedback
// ---------------------------------------------------------------------------

/// Everything produced by one evaluation of a learner utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationFeedback {
    /// Integer percentage of target words matched.
    pub accuracy: u32,
    /// Target words the learner got right, in discovery order.
    pub correct_words: Vec<String>,
    /// Unmatched spoken words followed by omitted target words.
    pub incorrect_words: Vec<String>,
    /// Accuracy-banded feedback sentence.
    pub feedback: String,
    /// What the tutor says next.
    pub tutor_response: TutorReply,
    /// Pronunciation tips for the first few incorrect words.
    pub suggestions: Vec<String>,
}
