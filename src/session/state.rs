//! Session state machine.
//!
//! ```text
//! Listen ──≥85──▶ Repeat ──≥85──▶ Correct ──≥85──▶ Roleplay ──≥85──▶ Reward
//!   ▲                                                                  │
//!   └──────────────────────────── reset() ─────────────────────────────┘
//! ```
//!
//! An evaluation below the threshold leaves the step unchanged; `Reward` is
//! terminal.  The session is owned by a single engine and is only mutated
//! through `&mut self`, so there is exactly one writer at any time.

use serde::Serialize;

/// Accuracy (percent) at or above which the session advances one step.
pub const DEFAULT_ADVANCE_THRESHOLD: u32 = 85;

// ---------------------------------------------------------------------------
// TutorStep
// ---------------------------------------------------------------------------

/// Steps of a tutoring session, in teaching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorStep {
    /// Learner listens to the target phrase.
    #[default]
    Listen,
    /// Learner repeats the phrase.
    Repeat,
    /// Tutor corrects pronunciation.
    Correct,
    /// Learner uses the phrase in a role-play.
    Roleplay,
    /// Lesson finished.
    Reward,
}

impl TutorStep {
    /// All steps in order.
    pub const ALL: [TutorStep; 5] = [
        TutorStep::Listen,
        TutorStep::Repeat,
        TutorStep::Correct,
        TutorStep::Roleplay,
        TutorStep::Reward,
    ];

    /// The following step, or `self` when already terminal.
    ///
    /// ```
    /// use voice_tutor::session::TutorStep;
    ///
    /// assert_eq!(TutorStep::Listen.next(), TutorStep::Repeat);
    /// assert_eq!(TutorStep::Reward.next(), TutorStep::Reward);
    /// ```
    pub fn next(self) -> Self {
        match self {
            TutorStep::Listen => TutorStep::Repeat,
            TutorStep::Repeat => TutorStep::Correct,
            TutorStep::Correct => TutorStep::Roleplay,
            TutorStep::Roleplay | TutorStep::Reward => TutorStep::Reward,
        }
    }

    /// Returns `true` for the last step.
    pub fn is_terminal(self) -> bool {
        self == TutorStep::Reward
    }

    /// Lowercase name used in logs and the CLI.
    pub fn label(self) -> &'static str {
        match self {
            TutorStep::Listen => "listen",
            TutorStep::Repeat => "repeat",
            TutorStep::Correct => "correct",
            TutorStep::Roleplay => "roleplay",
            TutorStep::Reward => "reward",
        }
    }
}

impl std::fmt::Display for TutorStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TutorSession
// ---------------------------------------------------------------------------

/// Mutable progress of one learner's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorSession {
    /// Where the learner is in the lesson flow.
    pub current_step: TutorStep,
    /// Number of evaluations recorded.
    pub attempts: u32,
    /// Sum of raw accuracies of every evaluation.
    pub score: u64,
    /// Ids of completed lessons, in completion order, without duplicates.
    pub completed_lessons: Vec<String>,
    #[serde(skip)]
    advance_threshold: u32,
}

impl TutorSession {
    /// A fresh session using [`DEFAULT_ADVANCE_THRESHOLD`].
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_ADVANCE_THRESHOLD)
    }

    /// A fresh session that advances at `advance_threshold` percent.
    pub fn with_threshold(advance_threshold: u32) -> Self {
        Self {
            current_step: TutorStep::Listen,
            attempts: 0,
            score: 0,
            completed_lessons: Vec::new(),
            advance_threshold,
        }
    }

    /// Record one evaluation.
    ///
    /// Increments `attempts`, adds `accuracy` to `score` and advances one
    /// step when `accuracy` reaches the threshold.  Returns `true` when the
    /// step changed.
    ///
    /// ```
    /// use voice_tutor::session::{TutorSession, TutorStep};
    ///
    /// let mut session = TutorSession::new();
    /// assert!(!session.record(60));
    /// assert!(session.record(90));
    /// assert_eq!(session.current_step, TutorStep::Repeat);
    /// assert_eq!(session.attempts, 2);
    /// assert_eq!(session.score, 150);
    /// ```
    pub fn record(&mut self, accuracy: u32) -> bool {
        self.attempts += 1;
        self.score += u64::from(accuracy);

        if accuracy < self.advance_threshold {
            return false;
        }
        let next = self.current_step.next();
        let advanced = next != self.current_step;
        if advanced {
            log::info!("Session step {} → {}", self.current_step, next);
            self.current_step = next;
        }
        advanced
    }

    /// Mark `lesson_id` as completed.  Returns `false` if it already was.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        if self.completed_lessons.iter().any(|id| id == lesson_id) {
            return false;
        }
        self.completed_lessons.push(lesson_id.to_string());
        true
    }

    /// Mean accuracy over all attempts, or `None` before the first attempt.
    pub fn average_score(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.score as f64 / f64::from(self.attempts))
        }
    }

    /// Restore every field to its initial value.  The threshold is kept.
    pub fn reset(&mut self) {
        *self = Self::with_threshold(self.advance_threshold);
    }
}

impl Default for TutorSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- TutorStep ---

    #[test]
    fn steps_advance_in_order() {
        for pair in TutorStep::ALL.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[test]
    fn reward_is_terminal() {
        assert!(TutorStep::Reward.is_terminal());
        assert_eq!(TutorStep::Reward.next(), TutorStep::Reward);
        assert!(!TutorStep::Roleplay.is_terminal());
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = TutorStep::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["listen", "repeat", "correct", "roleplay", "reward"]);
        assert_eq!(TutorStep::Roleplay.to_string(), "roleplay");
    }

    #[test]
    fn default_step_is_listen() {
        assert_eq!(TutorStep::default(), TutorStep::Listen);
    }

    // ---- TutorSession ---

    #[test]
    fn new_session_is_empty() {
        let s = TutorSession::new();
        assert_eq!(s.current_step, TutorStep::Listen);
        assert_eq!(s.attempts, 0);
        assert_eq!(s.score, 0);
        assert!(s.completed_lessons.is_empty());
        assert_eq!(s.average_score(), None);
    }

    #[test]
    fn low_accuracy_stays_put() {
        let mut s = TutorSession::new();
        assert!(!s.record(84));
        assert_eq!(s.current_step, TutorStep::Listen);
        assert_eq!(s.attempts, 1);
    }

    #[test]
    fn threshold_accuracy_advances() {
        let mut s = TutorSession::new();
        assert!(s.record(85));
        assert_eq!(s.current_step, TutorStep::Repeat);
    }

    #[test]
    fn clamps_at_reward() {
        let mut s = TutorSession::new();
        for _ in 0..10 {
            s.record(100);
        }
        assert_eq!(s.current_step, TutorStep::Reward);
        assert!(!s.record(100));
        assert_eq!(s.attempts, 11);
    }

    #[test]
    fn step_never_regresses_and_attempts_count_up() {
        let mut s = TutorSession::new();
        let mut last_step = s.current_step;
        for (i, accuracy) in [90, 10, 0, 100, 50, 85, 84, 99, 20, 100, 100].into_iter().enumerate() {
            s.record(accuracy);
            assert!(s.current_step >= last_step);
            assert_eq!(s.attempts as usize, i + 1);
            last_step = s.current_step;
        }
        assert_eq!(s.current_step, TutorStep::Reward);
    }

    #[test]
    fn score_accumulates_raw_accuracy() {
        let mut s = TutorSession::new();
        s.record(20);
        s.record(100);
        s.record(45);
        assert_eq!(s.score, 165);
        assert_eq!(s.average_score(), Some(55.0));
    }

    #[test]
    fn custom_threshold() {
        let mut s = TutorSession::with_threshold(50);
        assert!(s.record(50));
        assert_eq!(s.current_step, TutorStep::Repeat);
    }

    #[test]
    fn complete_lesson_is_a_set() {
        let mut s = TutorSession::new();
        assert!(s.complete_lesson("cafe-order"));
        assert!(s.complete_lesson("bakery-shopping"));
        assert!(!s.complete_lesson("cafe-order"));
        assert_eq!(s.completed_lessons, ["cafe-order", "bakery-shopping"]);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut s = TutorSession::with_threshold(70);
        s.record(100);
        s.record(100);
        s.complete_lesson("cafe-order");
        s.reset();
        assert_eq!(s, TutorSession::with_threshold(70));
        // Threshold survives the reset.
        assert!(s.record(70));
    }

    #[test]
    fn snapshot_serialises_camel_case() {
        let json = serde_json::to_value(TutorSession::new()).unwrap();
        assert_eq!(json["currentStep"], "listen");
        assert_eq!(json["completedLessons"], serde_json::json!([]));
        assert!(json.get("advanceThreshold").is_none());
    }
}
