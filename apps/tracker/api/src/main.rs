use axum::{middleware, routing::get};
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod events;
mod openapi;
mod state;

use config::Config;
use domain_projects::InMemoryProjectRepository;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Install the Prometheus recorder before the first request lands
    observability::init_metrics();

    // Event publication is optional: enabled when NATS_URL is set
    let events = match std::env::var("NATS_URL") {
        Ok(url) => {
            info!("Connecting to NATS at {}", url);
            match async_nats::connect(&url).await {
                Ok(client) => {
                    info!("NATS connected successfully");
                    Some(events::EventPublisher::new(client))
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to NATS: {}", e);
                    None
                }
            }
        }
        Err(_) => None,
    };

    let state = AppState {
        config,
        repository: InMemoryProjectRepository::new(),
        events,
    };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // Merge operational endpoints into the app:
    // - /health: liveness check with app name/version
    // - /ready: readiness check with dependency checks
    // - /metrics: Prometheus exposition
    let app = router
        .layer(middleware::from_fn(observability::metrics_middleware))
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .route("/metrics", get(observability::metrics_handler));

    info!("Starting tracker API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown and cleanup.
    // State moves into the cleanup future.
    let server_config = state.config.server.clone();
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            if let Some(events) = state.events {
                info!("Shutting down: flushing event publisher");
                events.flush().await;
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Tracker API shutdown complete");
    Ok(())
}
