//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin, answers on stdout, and keeps the address book
//! in a JSON file between runs.

use anyhow::Result;
use contact_assistant::repositories::{BookRepository, FileBookRepository};
use contact_assistant::{Config, ConsoleView, Session};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the conversation)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book at {}", config.book_path.display());

    let repo = Arc::new(FileBookRepository::new(&config.book_path)) as Arc<dyn BookRepository>;
    let view = ConsoleView::new(std::io::stdout());

    let mut session = match Session::start(repo, view, config.birthday_window_days).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    session.run(BufReader::new(tokio::io::stdin())).await?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
