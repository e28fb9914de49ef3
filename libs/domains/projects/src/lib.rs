//! Projects Domain
//!
//! This module provides a complete domain implementation for tracking projects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, event publication
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_projects::{
//!     handlers,
//!     repository::InMemoryProjectRepository,
//!     service::ProjectService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryProjectRepository::new();
//! let service = ProjectService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProjectError, ProjectResult};
pub use events::{EventSink, ProjectCreatedEvent, ProjectDeletedEvent, ProjectUpdatedEvent};
pub use models::{CreateProject, Project, ProjectFilter, UpdateProject};
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::ProjectService;
