//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Every field has a
//! default, so a partial `settings.toml` is valid.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::feedback::DEFAULT_SUGGESTION_WORD_LIMIT;
use crate::scoring::DEFAULT_SIMILARITY_THRESHOLD;
use crate::session::DEFAULT_ADVANCE_THRESHOLD;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Scoring and session-progress settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Phonetic similarity a word pair must strictly exceed to match
    /// (0.0 – 1.0).
    pub similarity_threshold: f64,
    /// Accuracy percentage at which the session advances one step.
    pub advance_threshold: u32,
    /// Number of incorrect words that receive pronunciation tips.
    pub suggestion_word_limit: usize,
    /// Seed for tutor reply selection.  `None` picks a random seed.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Replace out-of-range values with their defaults.
    ///
    /// A threshold outside `[0, 1)` (or NaN) would make every phonetic
    /// comparison fail, leaving only verbatim matches.
    pub fn sanitize(&mut self) {
        let t = self.similarity_threshold;
        if !t.is_finite() || !(0.0..1.0).contains(&t) {
            log::warn!(
                "similarity_threshold {t} is outside [0, 1); using {DEFAULT_SIMILARITY_THRESHOLD}"
            );
            self.similarity_threshold = DEFAULT_SIMILARITY_THRESHOLD;
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            advance_threshold: DEFAULT_ADVANCE_THRESHOLD,
            suggestion_word_limit: DEFAULT_SUGGESTION_WORD_LIMIT,
            seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// LessonConfig
// ---------------------------------------------------------------------------

/// Where lessons come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    /// JSON lesson catalog.  `None` tries `lessons.json` in the config dir,
    /// then the built-in lessons.
    pub catalog_path: Option<PathBuf>,
}

impl LessonConfig {
    /// Catalog to load: the configured path, else `lessons.json` in the
    /// config directory when that file exists.
    pub fn resolve_catalog_path(&self, paths: &AppPaths) -> Option<PathBuf> {
        if let Some(path) = &self.catalog_path {
            return Some(path.clone());
        }
        paths.lessons_file.exists().then(|| paths.lessons_file.clone())
    }
}

// ---------------------------------------------------------------------------
// VoiceConfig
// ---------------------------------------------------------------------------

/// Settings for speaking tutor replies aloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether replies are spoken at all.
    pub enabled: bool,
    /// External text-to-speech program, e.g. `["espeak-ng", "-v", "fr"]`.
    /// The phrase is appended as the final argument.
    pub command: Vec<String>,
    /// Maximum seconds to wait for the command before giving up.
    pub timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: Vec::new(),
            timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use voice_tutor::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring / session settings.
    pub engine: EngineConfig,
    /// Lesson source.
    pub lessons: LessonConfig,
    /// Tutor voice output.
    pub voice: VoiceConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.engine.sanitize();
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.engine.similarity_threshold, 0.8);
        assert_eq!(cfg.engine.advance_threshold, 85);
        assert_eq!(cfg.engine.suggestion_word_limit, 3);
        assert!(cfg.engine.seed.is_none());
        assert!(cfg.lessons.catalog_path.is_none());
        assert!(!cfg.voice.enabled);
        assert!(cfg.voice.command.is_empty());
        assert_eq!(cfg.voice.timeout_secs, 10);
    }

    /// Modified non-default values survive a save / load cycle.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.engine.similarity_threshold = 0.7;
        cfg.engine.advance_threshold = 90;
        cfg.engine.seed = Some(1234);
        cfg.lessons.catalog_path = Some(PathBuf::from("/tmp/lessons.json"));
        cfg.voice.enabled = true;
        cfg.voice.command = vec!["espeak-ng".into(), "-v".into(), "fr".into()];

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded, cfg);
    }

    /// Sections and fields missing from the file fall back to defaults.
    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[engine]\nadvance_threshold = 70\n").expect("write");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded.engine.advance_threshold, 70);
        assert_eq!(loaded.engine.similarity_threshold, 0.8);
        assert_eq!(loaded.voice, VoiceConfig::default());
    }

    #[test]
    fn out_of_range_threshold_falls_back_to_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        for value in ["nan", "1.0", "-0.2", "inf"] {
            std::fs::write(&path, format!("[engine]\nsimilarity_threshold = {value}\n"))
                .expect("write");
            let loaded = AppConfig::load_from(&path).expect("load");
            assert_eq!(loaded.engine.similarity_threshold, 0.8, "value {value}");
        }

        std::fs::write(&path, "[engine]\nsimilarity_threshold = 0.0\n").expect("write");
        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded.engine.similarity_threshold, 0.0);
    }

    fn paths_in(dir: &std::path::Path) -> AppPaths {
        AppPaths {
            config_dir: dir.to_path_buf(),
            settings_file: dir.join("settings.toml"),
            lessons_file: dir.join("lessons.json"),
        }
    }

    #[test]
    fn catalog_path_prefers_configured_file() {
        let dir = tempdir().expect("temp dir");
        let paths = paths_in(dir.path());
        std::fs::write(&paths.lessons_file, "[]").expect("write");

        let cfg = LessonConfig {
            catalog_path: Some(PathBuf::from("/srv/lessons.json")),
        };
        assert_eq!(
            cfg.resolve_catalog_path(&paths),
            Some(PathBuf::from("/srv/lessons.json"))
        );
    }

    #[test]
    fn catalog_path_falls_back_to_config_dir_file() {
        let dir = tempdir().expect("temp dir");
        let paths = paths_in(dir.path());
        let cfg = LessonConfig::default();

        assert_eq!(cfg.resolve_catalog_path(&paths), None);

        std::fs::write(&paths.lessons_file, "[]").expect("write");
        assert_eq!(cfg.resolve_catalog_path(&paths), Some(paths.lessons_file.clone()));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[engine\n").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }
}
