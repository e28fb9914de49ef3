use axum::Router;
use domain_projects::{ProjectService, handlers};
use std::sync::Arc;

pub fn router(state: &crate::state::AppState) -> Router {
    let mut service = ProjectService::new(state.repository.clone());
    if let Some(events) = &state.events {
        service = service.with_events(Arc::new(events.clone()));
    }
    handlers::router(service)
}
