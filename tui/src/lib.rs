//! Terminal front end for the newscheck demo.
//!
//! The UI owns the terminal for the duration of the run, so logs are
//! written to a file under the user's local data directory instead of
//! stdout/stderr.

mod app;
mod app_event;
mod app_event_sender;
mod cli;
mod colors;
mod key_hint;
mod ui;

pub use cli::Cli;

use std::io::stdout;
use std::path::Path;

use color_eyre::eyre::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::execute;
use newscheck_core::KeywordClassifier;
use newscheck_core::KeywordConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::App;

pub async fn run_main(cli: Cli) -> Result<()> {
    let _log_guard = init_logging(cli.debug)?;
    // Load the keyword file before entering the alternate screen so a bad
    // path or malformed TOML prints like any other CLI error.
    let classifier = load_classifier(cli.keywords.as_deref())?;
    tracing::info!("starting newscheck");

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;
    let result = App::new(classifier, cli.text).run(&mut terminal).await;
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();
    result
}

fn load_classifier(keywords: Option<&Path>) -> Result<KeywordClassifier> {
    match keywords {
        Some(path) => {
            let config = KeywordConfig::load(path)?;
            tracing::debug!(path = %path.display(), "loaded keyword overrides");
            Ok(config.into())
        }
        None => Ok(KeywordClassifier::default()),
    }
}

fn init_logging(debug: bool) -> Result<WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("newscheck")
        .join("log");
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, "newscheck-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let default_filter = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
