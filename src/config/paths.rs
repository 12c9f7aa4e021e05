//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings + custom lessons):
//!   Windows: %APPDATA%\voice-tutor\
//!   macOS:   ~/Library/Application Support/voice-tutor/
//!   Linux:   ~/.config/voice-tutor/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `lessons.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Default location of a user lesson catalog.
    pub lessons_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "voice-tutor";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let lessons_file = config_dir.join("lessons.json");

        Self {
            config_dir,
            settings_file,
            lessons_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.toml"));
        assert!(paths
            .lessons_file
            .file_name()
            .is_some_and(|n| n == "lessons.json"));
        assert!(paths.settings_file.starts_with(&paths.config_dir));
    }
}
