//! Tutor voice output.
//!
//! Speaking replies aloud is delegated to an external collaborator; the
//! scoring engine never waits on it.  This module provides:
//! * [`TutorVoice`] — async trait implemented by every voice backend.
//! * [`SilentVoice`] — text-only backend, never fails.
//! * [`CommandVoice`] — runs a local text-to-speech program.
//! * [`FallbackVoice`] — wraps any backend; degrades to text-only on error.
//! * [`VoiceError`] — error variants for voice playback.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use voice_tutor::config::VoiceConfig;
//! use voice_tutor::feedback::TutorReply;
//! use voice_tutor::voice::{CommandVoice, FallbackVoice, TutorVoice};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = VoiceConfig {
//!         enabled: true,
//!         command: vec!["espeak-ng".into(), "-v".into(), "fr".into()],
//!         timeout_secs: 10,
//!     };
//!     let voice = FallbackVoice::new(CommandVoice::from_config(&config));
//!
//!     // Never returns Err: failures fall back to text-only delivery.
//!     let delivery = voice.speak(&TutorReply::greeting()).await.unwrap();
//!     println!("{delivery:?}");
//! }
//! ```

pub mod command;
pub mod fallback;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::VoiceConfig;
use crate::feedback::TutorReply;

pub use command::CommandVoice;
pub use fallback::FallbackVoice;

// ---------------------------------------------------------------------------
// VoiceError
// ---------------------------------------------------------------------------

/// Errors that can occur while speaking a reply.
#[derive(Debug, Error)]
pub enum VoiceError {
    /// No text-to-speech command is configured.
    #[error("no voice command configured")]
    NotConfigured,

    /// The command could not be started.
    #[error("failed to start voice command: {0}")]
    Spawn(#[from] std::io::Error),

    /// The command ran but reported failure.
    #[error("voice command exited with {0}")]
    Failed(std::process::ExitStatus),

    /// The command did not finish within the configured timeout.
    #[error("voice command timed out")]
    Timeout,
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

/// How a reply reached the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The reply was spoken aloud.
    Spoken,
    /// Only the text is available (voice disabled or failed).
    TextOnly,
}

// ---------------------------------------------------------------------------
// TutorVoice trait
// ---------------------------------------------------------------------------

/// Async trait for speaking tutor replies.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn TutorVoice>`).
#[async_trait]
pub trait TutorVoice: Send + Sync {
    async fn speak(&self, reply: &TutorReply) -> Result<Delivery, VoiceError>;
}

// ---------------------------------------------------------------------------
// SilentVoice
// ---------------------------------------------------------------------------

/// Voice backend that speaks nothing; replies are shown as text only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentVoice;

#[async_trait]
impl TutorVoice for SilentVoice {
    async fn speak(&self, _reply: &TutorReply) -> Result<Delivery, VoiceError> {
        Ok(Delivery::TextOnly)
    }
}

/// Build the voice backend described by `config`.
///
/// Disabled voice yields [`SilentVoice`]; otherwise a [`CommandVoice`] wrapped
/// in [`FallbackVoice`] so playback problems never surface as errors.
pub fn from_config(config: &VoiceConfig) -> Box<dyn TutorVoice> {
    if config.enabled {
        Box::new(FallbackVoice::new(CommandVoice::from_config(config)))
    } else {
        Box::new(SilentVoice)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn silent_voice_is_text_only() {
        let delivery = SilentVoice.speak(&TutorReply::greeting()).await.unwrap();
        assert_eq!(delivery, Delivery::TextOnly);
    }

    #[tokio::test]
    async fn disabled_config_never_fails() {
        let voice = from_config(&VoiceConfig::default());
        let delivery = voice.speak(&TutorReply::greeting()).await.unwrap();
        assert_eq!(delivery, Delivery::TextOnly);
    }

    #[tokio::test]
    async fn enabled_config_without_command_falls_back() {
        let config = VoiceConfig {
            enabled: true,
            ..VoiceConfig::default()
        };
        let voice = from_config(&config);
        let delivery = voice.speak(&TutorReply::greeting()).await.unwrap();
        assert_eq!(delivery, Delivery::TextOnly);
    }
}
