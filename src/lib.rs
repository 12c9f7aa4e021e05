//! Spoken-phrase scoring engine for a French pronunciation tutor.
//!
//! Given a learner's transcribed utterance and a [`Lesson`](lesson::Lesson),
//! the engine produces an accuracy score, per-word correctness, remedial
//! feedback and a tutor reply.  It never touches audio: speech-to-text and
//! voice playback are external collaborators.
//!
//! # Modules
//!
//! * [`text`] — normalisation and phonetic keys.
//! * [`scoring`] — edit distance, word matching, accuracy.
//! * [`feedback`] — feedback text, tutor replies, tips, register analysis.
//! * [`session`] — lesson-flow state machine.
//! * [`engine`] — [`TutorEngine`], which chains all of the above.
//! * [`lesson`] — lesson descriptors and catalogs.
//! * [`voice`] — optional tutor voice output.
//! * [`config`] — TOML settings.

pub mod config;
pub mod engine;
pub mod feedback;
pub mod lesson;
pub mod scoring;
pub mod session;
pub mod text;
pub mod voice;

pub use engine::TutorEngine;
pub use feedback::PronunciationFeedback;
pub use lesson::Lesson;
