//! Project domain events.
//!
//! The service publishes an event after each successful mutation through the
//! [`EventSink`] seam. Transports live outside the domain: the app wires a
//! NATS-backed sink, tests use a recording stub. Publication failures must
//! never fail the request; implementations log and swallow transport errors.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Project;

/// Event published when a project is created
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreatedEvent {
    pub id: Uuid,
    pub name: String,
}

/// Event published when a project is updated
#[derive(Debug, Clone, Serialize)]
pub struct ProjectUpdatedEvent {
    pub id: Uuid,
    pub name: String,
}

/// Event published when a project is deleted
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDeletedEvent {
    pub id: Uuid,
}

impl From<&Project> for ProjectCreatedEvent {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
        }
    }
}

impl From<&Project> for ProjectUpdatedEvent {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
        }
    }
}

/// Sink for project domain events.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn project_created(&self, event: ProjectCreatedEvent);
    async fn project_updated(&self, event: ProjectUpdatedEvent);
    async fn project_deleted(&self, event: ProjectDeletedEvent);
}
