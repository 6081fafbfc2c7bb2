use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "smartnotes",
    version,
    about = "A small terminal note manager with tags",
    long_about = None
)]
/// Command line arguments.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Notes file path.
    #[arg(short, long, value_name = "PATH")]
    pub notes_file: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Do not write the example note on first run.
    #[arg(long)]
    pub no_seed: bool,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
