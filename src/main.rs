// src/main.rs

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zxy_dashboard::{
    config::AppConfig, dashboard::DashboardData, db::PgGateway, routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();

    info!(?config, "configuration loaded");
    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set, using the built-in development key");
    }

    // Lazy pool: requests degrade to fallback data until the database answers
    let gateway = PgGateway::connect_lazy(&config.database)?;
    let state = AppState::new(DashboardData::new(Arc::new(gateway)));
    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("dashboard listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
