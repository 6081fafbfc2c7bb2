use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use smartnotes::infrastructure::{AppConfig, CliArgs, JsonNoteRepository, StorageManager};
use smartnotes::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    // The terminal belongs to the TUI, so without a log file nothing is written.
    let Some(log_path) = config.effective_log_path() else {
        tracing_subscriber::registry().with(filter).init();
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let storage = StorageManager::new(args.config.as_deref())?;
    let mut config = storage.load_config()?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = smartnotes::VERSION, "Starting smartnotes");
    info!(path = %storage.config_path().display(), "Configuration loaded");

    let notes_path = config.effective_notes_path();
    info!(path = %notes_path.display(), "Using notes file");
    let repository = Arc::new(JsonNoteRepository::new(notes_path));

    Ok(App::new(repository, &config))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
