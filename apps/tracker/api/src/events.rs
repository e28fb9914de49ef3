//! Event publishing module for NATS messaging.
//!
//! Implements the domain's `EventSink` seam on top of a NATS client.
//! Publication failures are logged and swallowed; a lost event never fails
//! the originating request.

use async_nats::Client;
use async_trait::async_trait;
use domain_projects::{EventSink, ProjectCreatedEvent, ProjectDeletedEvent, ProjectUpdatedEvent};
use observability::counter;
use serde::Serialize;
use tracing::{error, info, instrument};

/// NATS event publisher
#[derive(Clone)]
pub struct EventPublisher {
    client: Client,
}

impl EventPublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Publish an event to a subject
    #[instrument(skip(self, event), fields(subject = %subject))]
    async fn publish<T: Serialize>(&self, subject: &str, event: &T) {
        match serde_json::to_vec(event) {
            Ok(payload) => {
                if let Err(e) = self.client.publish(subject.to_string(), payload.into()).await {
                    error!(error = %e, subject = %subject, "Failed to publish event");
                } else {
                    counter!("project_events_published_total", "subject" => subject.to_string())
                        .increment(1);
                    info!(subject = %subject, "Event published");
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize event");
            }
        }
    }

    /// Flush buffered messages, used during shutdown.
    pub async fn flush(&self) {
        if let Err(e) = self.client.flush().await {
            error!(error = %e, "Failed to flush NATS client");
        }
    }

    /// Readiness probe against the underlying connection.
    pub async fn check(&self) -> Result<(), String> {
        self.client
            .flush()
            .await
            .map_err(|e| format!("NATS flush failed: {}", e))
    }
}

#[async_trait]
impl EventSink for EventPublisher {
    async fn project_created(&self, event: ProjectCreatedEvent) {
        self.publish("projects.created", &event).await;
    }

    async fn project_updated(&self, event: ProjectUpdatedEvent) {
        self.publish("projects.updated", &event).await;
    }

    async fn project_deleted(&self, event: ProjectDeletedEvent) {
        self.publish("projects.deleted", &event).await;
    }
}
