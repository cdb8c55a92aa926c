//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `workhour::WorkhourError`.

use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use store::Database;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use workhour::{AppConfig, DocumentRepository, WorkhourConfig, build_app};

const DEFAULT_CONFIG_PATH: &str = "./config/config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config_path =
        env::var("WORKHOUR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&config_path)?;

    init_tracing(config.log_path.as_deref())?;
    tracing::info!(path = %config_path, port = config.port, "Configuration loaded");

    let workhour_config = config.workhour_config()?;

    // Database connection; closed on every exit path below
    let database = Database::open(&config.database).await?;
    database
        .scoped(async |database: &Database| serve(database, config.port, &workhour_config).await)
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Migrate, then serve until Ctrl-C
async fn serve(database: &Database, port: u16, config: &WorkhourConfig) -> anyhow::Result<()> {
    database.migrate().await?;

    let repo = DocumentRepository::new(Arc::new(database.document_store()));

    // Build router
    let app = build_app(repo, config).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Stdout logging, plus a plain-text file when `LogPath` is configured
fn init_tracing(log_path: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "api=info,workhour=info,store=info,tower_http=info".into());

    let file_layer = match log_path {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("LogPath has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)?;

            Some(fmt::layer().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
