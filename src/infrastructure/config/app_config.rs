//! Application configuration.

use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

const APP_NAME: &str = "smartnotes";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "smartnotes";

const NOTES_FILE_NAME: &str = "notes.json";
const LOG_FILE_NAME: &str = "smartnotes.log";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and merged with CLI
/// arguments.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Notes file path. Defaults to `notes.json` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_file: Option<PathBuf>,

    /// Write an example note when no notes file exists yet.
    #[serde(default = "default_true")]
    pub seed_example: bool,

    /// Custom keybindings, e.g. `"Ctrl+w" = "SaveNote"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key binding footer.
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_footer: true }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(notes_file) = args.notes_file {
            self.notes_file = Some(notes_file);
        }
        if args.no_seed {
            self.seed_example = false;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default notes file path.
    #[must_use]
    pub fn default_notes_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join(NOTES_FILE_NAME))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Returns effective notes file path.
    ///
    /// Falls back to `notes.json` in the working directory when no data
    /// directory can be determined.
    #[must_use]
    pub fn effective_notes_path(&self) -> PathBuf {
        self.notes_file
            .clone()
            .or_else(Self::default_notes_path)
            .unwrap_or_else(|| PathBuf::from(NOTES_FILE_NAME))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            notes_file: None,
            seed_example: true,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"
            notes_file = "/tmp/my-notes.json"
            seed_example = false

            [ui]
            show_footer = false

            [theme]
            accent_color = "#ff8800"

            [keybindings]
            "Ctrl+w" = "SaveNote"
            "F5" = "ToggleTagSearch"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.notes_file, Some(PathBuf::from("/tmp/my-notes.json")));
        assert!(!config.seed_example);
        assert!(!config.ui.show_footer);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.keybindings.get("Ctrl+w"), Some(&Action::SaveNote));
        assert_eq!(config.keybindings.get("F5"), Some(&Action::ToggleTagSearch));
    }

    #[test]
    fn test_default_config() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.seed_example);
        assert!(config.ui.show_footer);
        assert!(config.keybindings.is_empty());
        assert_eq!(config.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "smartnotes",
            "--notes-file",
            "here.json",
            "--log-level",
            "warn",
            "--no-seed",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.effective_notes_path(), PathBuf::from("here.json"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.seed_example);
    }

    #[test]
    fn test_absent_cli_flags_keep_config() {
        let mut config = AppConfig {
            notes_file: Some(PathBuf::from("kept.json")),
            ..AppConfig::default()
        };

        config.merge_with_args(CliArgs::parse_from(["smartnotes"]));

        assert_eq!(config.notes_file, Some(PathBuf::from("kept.json")));
        assert!(config.seed_example);
    }
}
