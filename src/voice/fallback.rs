//! Fallback voice — wraps any [`TutorVoice`] and degrades to text on error.
//!
//! When the underlying backend fails for any reason (`NotConfigured`,
//! `Spawn`, `Failed`, `Timeout`) [`FallbackVoice`] logs a warning and reports
//! [`Delivery::TextOnly`] instead of propagating the error.  Feedback text
//! is always available to the learner, so a broken speaker never blocks a
//! lesson.

use async_trait::async_trait;

use super::{Delivery, TutorVoice, VoiceError};
use crate::feedback::TutorReply;

// ---------------------------------------------------------------------------
// FallbackVoice
// ---------------------------------------------------------------------------

/// A transparent wrapper around any [`TutorVoice`] that never returns an
/// error.  Failed playback is not retried.
pub struct FallbackVoice<V: TutorVoice> {
    inner: V,
}

impl<V: TutorVoice> FallbackVoice<V> {
    /// Wrap `inner` with fallback behaviour.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Return a reference to the wrapped backend.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

#[async_trait]
impl<V: TutorVoice> TutorVoice for FallbackVoice<V> {
    /// Attempt playback; report text-only delivery if any error occurs.
    ///
    /// This implementation **never** returns `Err(_)`.
    async fn speak(&self, reply: &TutorReply) -> Result<Delivery, VoiceError> {
        match self.inner.speak(reply).await {
            Ok(delivery) => Ok(delivery),
            Err(err) => {
                log::warn!("Tutor voice failed ({err}); showing text only");
                Ok(Delivery::TextOnly)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
