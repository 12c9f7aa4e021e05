//! Application entry point — interactive pronunciation tutor.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the lesson catalog: the configured path, else `lessons.json` in
//!    the config dir, else the built-in lessons.
//! 4. Build the [`TutorEngine`] and the tutor voice from config.
//! 5. Greet the learner and present the first lesson.
//! 6. Read transcripts and commands from stdin until EOF or `:quit`.
//!
//! Each non-command line is treated as an already-transcribed utterance.

use tokio::io::{AsyncBufReadExt, BufReader};
use voice_tutor::{
    config::{AppConfig, AppPaths},
    engine::TutorEngine,
    feedback::{PronunciationFeedback, TutorReply},
    lesson::{Lesson, LessonCatalog},
    voice::{self, TutorVoice},
};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// One line of learner input.
#[derive(Debug, PartialEq)]
enum TutorCommand<'a> {
    /// Score this transcript against the current lesson.
    Transcript(&'a str),
    /// Replay the current lesson's target phrase.
    Listen,
    /// Move to the next lesson (wrapping).
    Next,
    /// Jump to the lesson with this id.
    Lesson(&'a str),
    /// Print the session state as JSON.
    Session,
    /// Reset the session.
    Reset,
    /// Mark the current lesson completed.
    Done,
    /// Analyse the register of the given text.
    Polite(&'a str),
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl<'a> TutorCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return if line.is_empty() {
                TutorCommand::Empty
            } else {
                TutorCommand::Transcript(line)
            };
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name {
            "listen" => TutorCommand::Listen,
            "next" => TutorCommand::Next,
            "lesson" => TutorCommand::Lesson(arg),
            "session" => TutorCommand::Session,
            "reset" => TutorCommand::Reset,
            "done" => TutorCommand::Done,
            "polite" => TutorCommand::Polite(arg),
            "quit" | "q" => TutorCommand::Quit,
            _ => TutorCommand::Help,
        }
    }
}

const HELP: &str = "\
Type what you said (as transcribed) to have it scored, or a command:
  :listen        replay the target phrase
  :next          next lesson
  :lesson <id>   jump to a lesson
  :done          mark the current lesson completed
  :session       show session progress
  :reset         reset session progress
  :polite <text> check tu / vous register
  :quit          exit";

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

fn print_lesson(lesson: &Lesson) {
    println!();
    println!("== {} ({}) ==", lesson.title, lesson.id);
    println!("Scenario: {}", lesson.scenario);
    println!("Say:      {}", lesson.target_phrase);
    println!("Meaning:  {}", lesson.target_translation());
    if !lesson.vocabulary.is_empty() {
        println!("Words:    {}", lesson.vocabulary.join(", "));
    }
    println!("Grammar:  {}", lesson.grammar);
}

fn print_feedback(result: &PronunciationFeedback) {
    println!("Accuracy: {}%", result.accuracy);
    if !result.correct_words.is_empty() {
        println!("Correct:   {}", result.correct_words.join(", "));
    }
    if !result.incorrect_words.is_empty() {
        println!("Incorrect: {}", result.incorrect_words.join(", "));
    }
    println!("{}", result.feedback);
    for tip in &result.suggestions {
        println!("  - {tip}");
    }
}

/// Print the reply and hand it to the voice.  Voice failures only log.
async fn say(voice: &dyn TutorVoice, reply: &TutorReply) {
    println!("Prof Julia: {}", reply.phrase);
    println!("            ({})", reply.translation);
    if let Err(e) = voice.speak(reply).await {
        log::warn!("Tutor voice unavailable: {e}");
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Voice tutor starting up");

    // 2. Config
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Lessons
    let catalog_path = config.lessons.resolve_catalog_path(&AppPaths::new());
    let catalog = LessonCatalog::load_or_builtin(catalog_path.as_deref());
    let mut current = 0usize;

    // 4. Engine + voice
    let mut engine = TutorEngine::from_config(&config.engine);
    let voice = voice::from_config(&config.voice);

    // 5. Greeting
    say(voice.as_ref(), &engine.greeting()).await;
    print_lesson(&catalog.lessons()[current]);
    println!("\n{HELP}");

    // 6. Input loop
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let lesson = &catalog.lessons()[current];
        match TutorCommand::parse(&line) {
            TutorCommand::Empty => {}
            TutorCommand::Transcript(text) => {
                let result = engine.analyze_user_speech(text, lesson);
                print_feedback(&result);
                say(voice.as_ref(), &result.tutor_response).await;
            }
            TutorCommand::Listen => say(voice.as_ref(), &TutorReply::target(lesson)).await,
            TutorCommand::Next => {
                current = catalog.next_after(current);
                print_lesson(&catalog.lessons()[current]);
            }
            TutorCommand::Lesson(id) => match catalog.position(id) {
                Some(idx) => {
                    current = idx;
                    print_lesson(&catalog.lessons()[current]);
                }
                None => {
                    let ids: Vec<&str> = catalog.iter().map(|l| l.id.as_str()).collect();
                    println!("Unknown lesson '{id}'. Available: {}", ids.join(", "));
                }
            },
            TutorCommand::Session => {
                let session = engine.session();
                println!("{}", serde_json::to_string_pretty(session)?);
                if let Some(avg) = session.average_score() {
                    println!("Average accuracy: {avg:.1}%");
                }
            }
            TutorCommand::Reset => {
                engine.reset_session();
                println!("Session reset.");
            }
            TutorCommand::Done => {
                if engine.complete_lesson(&lesson.id) {
                    println!("Lesson '{}' completed.", lesson.id);
                } else {
                    println!("Lesson '{}' was already completed.", lesson.id);
                }
            }
            TutorCommand::Polite(text) => {
                let report = engine.analyze_politeness(text);
                println!("Register: {:?}", report.level);
                for s in &report.suggestions {
                    println!("  - {s}");
                }
            }
            TutorCommand::Help => println!("{HELP}"),
            TutorCommand::Quit => break,
        }
    }

    log::info!("Voice tutor shutting down");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_transcript() {
        assert_eq!(
            TutorCommand::parse("  bonjour madame "),
            TutorCommand::Transcript("bonjour madame")
        );
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(TutorCommand::parse("   "), TutorCommand::Empty);
    }

    #[test]
    fn commands_with_arguments() {
        assert_eq!(
            TutorCommand::parse(":lesson metro-directions"),
            TutorCommand::Lesson("metro-directions")
        );
        assert_eq!(
            TutorCommand::parse(":polite  tu viens?"),
            TutorCommand::Polite("tu viens?")
        );
    }

    #[test]
    fn bare_commands() {
        assert_eq!(TutorCommand::parse(":next"), TutorCommand::Next);
        assert_eq!(TutorCommand::parse(":q"), TutorCommand::Quit);
        assert_eq!(TutorCommand::parse(":session"), TutorCommand::Session);
        assert_eq!(TutorCommand::parse(":lesson"), TutorCommand::Lesson(""));
    }

    #[test]
    fn unknown_command_shows_help() {
        assert_eq!(TutorCommand::parse(":dance"), TutorCommand::Help);
    }
}
