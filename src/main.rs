//! Vitrine - portfolio content gateway

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine::{
    config::Args,
    contact::{NotificationRelay, ResendRelay},
    server,
    store::{ContentStore, MemoryStore, PostgrestStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vitrine={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  Vitrine - Portfolio Content Gateway");
    info!("======================================");
    info!("Listen: {}", args.listen);
    info!(
        "Mode: {}",
        if args.dev_mode {
            "DEVELOPMENT"
        } else {
            "PRODUCTION"
        }
    );
    info!(
        "Content store: {}",
        args.content_api_url.as_deref().unwrap_or("(not configured)")
    );
    info!(
        "Notification relay: {}",
        if args.relay_config().is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );
    info!("======================================");

    // Store selection: remote when configured, in-memory in dev mode,
    // otherwise an unconfigured store that serves static defaults.
    let store: Arc<dyn ContentStore> = if args.store_configured() {
        Arc::new(PostgrestStore::init(args.postgrest_config())?)
    } else if args.dev_mode {
        info!("Using in-memory store (dev mode)");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(PostgrestStore::unconfigured())
    };

    let relay: Option<Arc<dyn NotificationRelay>> = match args.relay_config() {
        Some(config) => Some(Arc::new(ResendRelay::init(config)?)),
        None => None,
    };

    let state = Arc::new(server::AppState::new(args, store, relay)?);
    server::run(state).await?;

    Ok(())
}
