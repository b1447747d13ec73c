//! Contact Book - main entry point
//!
//! Runs one interactive session on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::store::{ContactStore, SessionStore};
use contact_book::{shell, Config, Session};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL; stdout is reserved for the screens
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

    let store = Arc::new(SessionStore::new()) as Arc<dyn ContactStore>;
    let mut session = Session::new(store, &config);

    info!(
        initial_view = %config.initial_view,
        card_width = config.card_width,
        cards_per_row = config.cards_per_row,
        "Starting contact book session"
    );

    shell::run(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}
