//! [`CommandVoice`] — speaks replies through a local text-to-speech program.
//!
//! The configured argv is run with the reply phrase appended as the last
//! argument, e.g. `espeak-ng -v fr "Bonjour!"`.  Output is discarded; only
//! the exit status matters.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::{Delivery, TutorVoice, VoiceError};
use crate::config::VoiceConfig;
use crate::feedback::TutorReply;

/// Runs an external text-to-speech command for each reply.
#[derive(Debug, Clone)]
pub struct CommandVoice {
    argv: Vec<String>,
    timeout: Duration,
}

impl CommandVoice {
    /// Build from the `[voice]` section of the config.
    pub fn from_config(config: &VoiceConfig) -> Self {
        Self {
            argv: config.command.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl TutorVoice for CommandVoice {
    async fn speak(&self, reply: &TutorReply) -> Result<Delivery, VoiceError> {
        let (program, args) = self.argv.split_first().ok_or(VoiceError::NotConfigured)?;

        let mut child = Command::new(program)
            .args(args)
            .arg(&reply.phrase)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let status = tokio::time::timeout(self.timeout, child.wait())
            .await
            .map_err(|_| VoiceError::Timeout)??;

        if status.success() {
            Ok(Delivery::Spoken)
        } else {
            Err(VoiceError::Failed(status))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(argv: &[&str], timeout_secs: u64) -> CommandVoice {
        CommandVoice::from_config(&VoiceConfig {
            enabled: true,
            command: argv.iter().map(|s| s.to_string()).collect(),
            timeout_secs,
        })
    }

    #[tokio::test]
    async fn empty_command_is_not_configured() {
        let err = voice(&[], 1).speak(&TutorReply::greeting()).await.unwrap_err();
        assert!(matches!(err, VoiceError::NotConfigured));
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let err = voice(&["definitely-not-a-real-tts-program"], 1)
            .speak(&TutorReply::greeting())
            .await
            .unwrap_err();
        assert!(matches!(err, VoiceError::Spawn(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_command_is_spoken() {
        let delivery = voice(&["true"], 5)
            .speak(&TutorReply::greeting())
            .await
            .unwrap();
        assert_eq!(delivery, Delivery::Spoken);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_reports_status() {
        let err = voice(&["false"], 5)
            .speak(&TutorReply::greeting())
            .await
            .unwrap_err();
        assert!(matches!(err, VoiceError::Failed(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_command_times_out() {
        // The appended phrase becomes `$0` of the script and is ignored.
        let err = voice(&["sh", "-c", "sleep 5"], 0)
            .speak(&TutorReply::greeting())
            .await
            .unwrap_err();
        assert!(matches!(err, VoiceError::Timeout));
    }
}
