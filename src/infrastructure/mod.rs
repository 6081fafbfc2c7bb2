//! Infrastructure layer with file and configuration adapters.

/// Application configuration.
pub mod config;
/// Note storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use storage::JsonNoteRepository;
