//! Application-specific readiness checks.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_projects::{ProjectFilter, ProjectRepository};

/// Readiness check endpoint that verifies the service dependencies.
///
/// The repository check issues a minimal list query; the events check is
/// included only when a NATS publisher is configured.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "repository",
        Box::pin(async {
            state
                .repository
                .list(ProjectFilter {
                    limit: 1,
                    ..Default::default()
                })
                .await
                .map(|_| ())
                .map_err(|e| format!("Repository check failed: {}", e))
        }),
    )];

    if let Some(events) = &state.events {
        checks.push(("events", Box::pin(async move { events.check().await })));
    }

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
