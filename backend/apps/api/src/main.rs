//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use config::ServerConfig;
use nearby::InMemoryStudentRepository;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,nearby=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let repo = InMemoryStudentRepository::seeded();
    tracing::info!(students = repo.len(), "Roster loaded");

    if config.allowed_origins.is_empty() {
        tracing::info!("CORS enabled for all origins");
    } else {
        tracing::info!(origins = ?config.allowed_origins, "CORS restricted to allow-list");
    }

    let app = app::build_app(&config, repo);

    // Start server
    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
