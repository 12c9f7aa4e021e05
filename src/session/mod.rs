//! Tutoring session progress.
//!
//! [`TutorStep`] is the fixed lesson flow; [`TutorSession`] tracks the
//! current step, attempt count, cumulative score and completed lessons.

pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use state::{TutorSession, TutorStep, DEFAULT_ADVANCE_THRESHOLD};
