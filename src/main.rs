//! Wiring & DI. Entry point: bootstrap adapters, inject into the ingest service, serve HTTP.
//! No business logic here; per-request checks live in IngestService.

use dotenv::dotenv;
use notion_session_sink::adapters::http::router;
use notion_session_sink::adapters::notion::NotionAdapter;
use notion_session_sink::ports::{IngestPort, PageSink};
use notion_session_sink::shared::config::AppConfig;
use notion_session_sink::usecases::IngestService;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let settings = cfg.ingest_settings();

    // Missing Notion settings fail each request with 500 rather than the process
    if settings.notion_token.is_none() {
        warn!("NOTION_TOKEN is not set; /ingest will fail until it is");
    }
    if settings.notion_sessions_db_id.is_none() {
        warn!("NOTION_SESSIONS_DB_ID is not set; /ingest will fail until it is");
    }
    if settings.requires_secret() {
        info!("WEBHOOK_SECRET is set; /ingest requires X-Webhook-Secret");
    } else {
        warn!("WEBHOOK_SECRET is not set; /ingest is unauthenticated");
    }

    // --- Outbound: Notion adapter (one pooled client, 20s timeout) ---
    let notion: Arc<dyn PageSink> =
        Arc::new(NotionAdapter::new().map_err(|e| anyhow::anyhow!("{}", e))?);

    // --- Use case ---
    let ingest: Arc<dyn IngestPort> = Arc::new(IngestService::new(notion, settings));

    // --- Inbound: HTTP ---
    let app = router(ingest);
    let addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down gracefully");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received terminate signal, shutting down"),
    }
}
