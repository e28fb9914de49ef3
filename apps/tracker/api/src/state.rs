//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.
//! The state contains:
//! - Configuration
//! - The project repository (in-process stand-in for the persistence service)
//! - The optional NATS event publisher

use crate::config::Config;
use crate::events::EventPublisher;
use domain_projects::InMemoryProjectRepository;

/// Shared application state.
///
/// Cloning is cheap: the repository shares its store behind an Arc and the
/// event publisher shares its connection.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Project repository shared by all handlers
    pub repository: InMemoryProjectRepository,
    /// NATS event publisher, present when NATS_URL is configured
    pub events: Option<EventPublisher>,
}
