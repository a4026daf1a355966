//! pinforge server entry point.
//!
//! Starts the Axum HTTP server with the PIN issuance endpoints.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pinforge::api;
use pinforge::app_state::AppState;
use pinforge::config::ServiceConfig;
use pinforge::domain::RandomPinGenerator;
use pinforge::persistence::{MemoryPinStore, PinStore, PostgresPinStore};
use pinforge::service::PinService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting pinforge");

    // Build the store
    let store: Arc<dyn PinStore> = if config.persistence_enabled {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;

        // Schema is created once here; there are no further migrations.
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("connected to postgres, schema up to date");

        Arc::new(PostgresPinStore::new(pool))
    } else {
        tracing::warn!("persistence disabled, issued pins will not survive a restart");
        Arc::new(MemoryPinStore::new())
    };

    // Build service layer
    let pin_service = Arc::new(PinService::new(store, Arc::new(RandomPinGenerator::new())));

    // Build application state
    let app_state = AppState { pin_service };

    // CORS is restricted to a single configured origin.
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_allowed_origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN is not a valid header value")?,
        )
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::build_router();

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            <api::ApiDoc as utoipa::OpenApi>::openapi(),
        ),
    );

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
