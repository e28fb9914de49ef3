use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};

/// Repository trait for Project persistence.
///
/// This is the seam toward the persistence collaborator; the service never
/// touches storage directly.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Create a new project
    async fn create(&self, input: CreateProject) -> ProjectResult<Project>;

    /// Get a project by ID
    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>>;

    /// List projects with optional filters
    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>>;

    /// Update an existing project
    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project>;

    /// Delete a project by ID, returning whether anything was removed
    async fn delete(&self, id: Uuid) -> ProjectResult<bool>;
}

/// In-memory implementation of ProjectRepository.
///
/// Stands in for the external persistence service; state lives for the
/// process lifetime only. Cloning shares the underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;

        let project = Project::new(input);
        projects.insert(project.id, project.clone());

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        let projects = self.projects.read().await;

        let mut result: Vec<Project> = projects
            .values()
            .filter(|p| {
                if let Some(ref name) = filter.name {
                    if !p.name.to_lowercase().contains(&name.to_lowercase()) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        // Sort by created_at descending (newest first)
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let result: Vec<Project> = result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect();

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;

        let project = projects.get_mut(&id).ok_or(ProjectError::NotFound(id))?;
        project.apply_update(input);
        let updated = project.clone();

        tracing::info!(project_id = %id, "Updated project");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let mut projects = self.projects.write().await;

        if projects.remove(&id).is_some() {
            tracing::info!(project_id = %id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: "A test project".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_project() {
        let repo = InMemoryProjectRepository::new();

        let project = repo.create(create_input("test-project")).await.unwrap();
        assert_eq!(project.name, "test-project");

        let fetched = repo.get_by_id(project.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().id, project.id);
    }

    #[tokio::test]
    async fn test_get_missing_project_is_none() {
        let repo = InMemoryProjectRepository::new();
        let fetched = repo.get_by_id(Uuid::new_v4()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_name() {
        let repo = InMemoryProjectRepository::new();
        repo.create(create_input("alpha-api")).await.unwrap();
        repo.create(create_input("beta-worker")).await.unwrap();

        let filter = ProjectFilter {
            name: Some("ALPHA".to_string()),
            ..Default::default()
        };
        let result = repo.list(filter).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "alpha-api");
    }

    #[tokio::test]
    async fn test_list_applies_pagination() {
        let repo = InMemoryProjectRepository::new();
        for i in 0..5 {
            repo.create(create_input(&format!("project-{}", i)))
                .await
                .unwrap();
        }

        let filter = ProjectFilter {
            name: None,
            limit: 2,
            offset: 1,
        };
        let result = repo.list(filter).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_project_fails() {
        let repo = InMemoryProjectRepository::new();

        let result = repo
            .update(Uuid::new_v4(), UpdateProject::default())
            .await;

        assert!(matches!(result, Err(ProjectError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_reports_prior_existence() {
        let repo = InMemoryProjectRepository::new();
        let project = repo.create(create_input("short-lived")).await.unwrap();

        assert!(repo.delete(project.id).await.unwrap());
        assert!(!repo.delete(project.id).await.unwrap());
    }
}
