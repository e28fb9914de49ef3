use metrics::counter;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProjectError, ProjectResult};
use crate::events::{EventSink, ProjectCreatedEvent, ProjectDeletedEvent, ProjectUpdatedEvent};
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::repository::ProjectRepository;

/// Service layer for Project business logic.
///
/// Validates input, delegates storage to the repository, and publishes a
/// domain event after each successful mutation.
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
    events: Option<Arc<dyn EventSink>>,
}

impl<R: ProjectRepository> Clone for ProjectService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            events: self.events.clone(),
        }
    }
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            events: None,
        }
    }

    /// Attach an event sink; mutations publish through it from then on.
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Create a new project
    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let project = self.repository.create(input).await?;
        counter!("project_operations_total", "operation" => "create").increment(1);

        if let Some(events) = &self.events {
            events
                .project_created(ProjectCreatedEvent::from(&project))
                .await;
        }

        Ok(project)
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: Uuid) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    /// List projects with filters
    pub async fn list_projects(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        self.repository.list(filter).await
    }

    /// Update a project
    ///
    /// A body that names a different project id than the path is rejected
    /// as unprocessable.
    pub async fn update_project(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        if let Some(body_id) = input.id {
            if body_id != id {
                return Err(ProjectError::Unprocessable(format!(
                    "project id {} in request body does not match path id {}",
                    body_id, id
                )));
            }
        }

        let project = self.repository.update(id, input).await?;
        counter!("project_operations_total", "operation" => "update").increment(1);

        if let Some(events) = &self.events {
            events
                .project_updated(ProjectUpdatedEvent::from(&project))
                .await;
        }

        Ok(project)
    }

    /// Delete a project.
    ///
    /// Deletion is idempotent: deleting an id that does not exist succeeds
    /// without an event.
    pub async fn delete_project(&self, id: Uuid) -> ProjectResult<()> {
        let deleted = self.repository.delete(id).await?;
        counter!("project_operations_total", "operation" => "delete").increment(1);

        if deleted {
            if let Some(events) = &self.events {
                events.project_deleted(ProjectDeletedEvent { id }).await;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProjectRepository;
    use async_trait::async_trait;
    use mockall::predicate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        created: Mutex<Vec<ProjectCreatedEvent>>,
        deleted: Mutex<Vec<ProjectDeletedEvent>>,
    }

    #[async_trait]
    impl EventSink for RecordingSink {
        async fn project_created(&self, event: ProjectCreatedEvent) {
            self.created.lock().unwrap().push(event);
        }

        async fn project_updated(&self, _event: ProjectUpdatedEvent) {}

        async fn project_deleted(&self, event: ProjectDeletedEvent) {
            self.deleted.lock().unwrap().push(event);
        }
    }

    #[tokio::test]
    async fn test_get_missing_project_is_not_found() {
        let mut mock_repo = MockProjectRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(id))
            .returning(|_| Ok(None));

        let service = ProjectService::new(mock_repo);
        let result = service.get_project(id).await;

        assert!(matches!(result, Err(ProjectError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_before_repository() {
        // No expectations: reaching the repository would panic the mock
        let mock_repo = MockProjectRepository::new();
        let service = ProjectService::new(mock_repo);

        let result = service
            .create_project(CreateProject {
                name: String::new(),
                description: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ProjectError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_with_mismatched_body_id_is_unprocessable() {
        let mock_repo = MockProjectRepository::new();
        let service = ProjectService::new(mock_repo);

        let result = service
            .update_project(
                Uuid::now_v7(),
                UpdateProject {
                    id: Some(Uuid::now_v7()),
                    name: Some("renamed".to_string()),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ProjectError::Unprocessable(_))));
    }

    #[tokio::test]
    async fn test_update_with_matching_body_id_passes_through() {
        let mut mock_repo = MockProjectRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update()
            .with(predicate::eq(id), predicate::always())
            .returning(|_, input| {
                let mut project = Project::new(CreateProject {
                    name: "original".to_string(),
                    description: String::new(),
                });
                project.apply_update(input);
                Ok(project)
            });

        let service = ProjectService::new(mock_repo);
        let updated = service
            .update_project(
                id,
                UpdateProject {
                    id: Some(id),
                    name: Some("renamed".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "renamed");
    }

    #[tokio::test]
    async fn test_delete_missing_project_succeeds_without_event() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let sink = Arc::new(RecordingSink::default());
        let service = ProjectService::new(mock_repo).with_events(sink.clone());

        service.delete_project(Uuid::now_v7()).await.unwrap();

        assert!(sink.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_existing_project_publishes_event() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(true));

        let sink = Arc::new(RecordingSink::default());
        let service = ProjectService::new(mock_repo).with_events(sink.clone());

        let id = Uuid::now_v7();
        service.delete_project(id).await.unwrap();

        let deleted = sink.deleted.lock().unwrap();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].id, id);
    }

    #[tokio::test]
    async fn test_create_publishes_event_with_project_name() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Project::new(input)));

        let sink = Arc::new(RecordingSink::default());
        let service = ProjectService::new(mock_repo).with_events(sink.clone());

        let project = service
            .create_project(CreateProject {
                name: "launch-plan".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();

        let created = sink.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, project.id);
        assert_eq!(created[0].name, "launch-plan");
    }
}
