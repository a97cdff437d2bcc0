//! deals-gateway server entry point.
//!
//! Starts the Axum HTTP server with the storefront and admin REST
//! endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use deals_gateway::api;
use deals_gateway::app_state::AppState;
use deals_gateway::config::GatewayConfig;
use deals_gateway::persistence::CatalogStore;
use deals_gateway::service::{AuthService, CatalogService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(addr = %config.listen_addr, "starting deals-gateway");

    // Connect to the store and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Build service layer
    let store = CatalogStore::new(pool);
    let catalog = Arc::new(CatalogService::new(store.clone()));
    let auth = Arc::new(AuthService::new(store, config.session_ttl_hours));

    // Build application state
    let app_state = AppState {
        catalog,
        auth,
        export_version: config.export_version.clone(),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
