//! Application configuration.

/// Configuration values.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Configuration file access.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
