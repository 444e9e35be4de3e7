//! Arcana: a Golden Dawn tarot reading service.
//!
//! This is the application entry point. It parses CLI arguments, loads
//! configuration from TOML, verifies the persistent storage directories,
//! initializes tracing (stderr plus a log file in the logs directory), builds
//! the Axum router, and starts the HTTP server. Any startup precondition
//! failure - unbindable port, unwritable storage - exits non-zero.

use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcana::config::{
    AppConfig, LoggingConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, HEALTH_CHECK_INTERVAL_SECS,
    HEALTH_CHECK_RETRIES, HEALTH_CHECK_START_PERIOD_SECS, HEALTH_CHECK_TIMEOUT_SECS,
};
use arcana::routes::create_router;
use arcana::state::AppState;
use arcana::{http, startup};

/// Arcana: a Golden Dawn tarot reading service
#[derive(Parser, Debug)]
#[command(name = "arcana", version, about)]
struct Args {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "arcana=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // An explicitly passed config file must exist; the default path may be
    // absent, in which case built-in defaults apply.
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    // Storage is a startup precondition: both persistent directories must be
    // writable before the endpoint binds, and the log file lives in one of
    // them, so this runs before tracing is initialized.
    startup::init_storage(&config.storage)?;
    let log_file = startup::open_log_file(&config.storage)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging, log_file);

    tracing::info!(
        readings = %config.storage.readings_dir.display(),
        logs = %config.storage.logs_dir.display(),
        "Storage directories verified writable"
    );

    if !config.storage.static_dir.is_dir() {
        tracing::warn!(
            path = %config.storage.static_dir.display(),
            "Static asset directory missing, card imagery will 404"
        );
    }

    // The probe schedule itself is enforced by the orchestrator; logged here
    // so a deployment mismatch is visible next to the listen address.
    tracing::info!(
        interval_secs = HEALTH_CHECK_INTERVAL_SECS,
        timeout_secs = HEALTH_CHECK_TIMEOUT_SECS,
        start_period_secs = HEALTH_CHECK_START_PERIOD_SECS,
        retries = HEALTH_CHECK_RETRIES,
        "Health probe contract"
    );

    // Create application state and router
    let state = AppState::new(config);
    tracing::info!(
        cards = state.deck.len(),
        spreads = state.spreads.len(),
        "Initialized Golden Dawn deck"
    );

    let app = create_router(state.clone());

    // Start server; blocks until graceful shutdown
    http::start_server(app, state).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Install the tracing subscriber: a stderr layer plus a file layer writing
/// into the logs persistent directory, both text or JSON per configuration.
fn init_tracing(filter: &str, logging: &LoggingConfig, log_file: Arc<File>) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(log_file)
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(log_file)
                    .with_ansi(false),
            )
            .init();
    }
}
