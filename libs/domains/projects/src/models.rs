use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Project entity - a unit of work tracked by the service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Unique identifier
    pub id: Uuid,
    /// Project name
    pub name: String,
    /// Free-form project description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating an existing project
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    /// Optional project id; when present it must match the id in the path
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Query filters for listing projects
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProjectFilter {
    /// Case-insensitive substring match on the project name
    pub name: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            name: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Project {
    /// Create a new project from CreateProject DTO
    pub fn new(input: CreateProject) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateProject DTO
    ///
    /// The `id` field is a consistency check handled by the service and is
    /// never written to the entity.
    pub fn apply_update(&mut self, update: UpdateProject) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_project_rejects_empty_name() {
        let input = CreateProject {
            name: String::new(),
            description: String::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_project_rejects_overlong_name() {
        let input = CreateProject {
            name: "x".repeat(101),
            description: String::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_apply_update_changes_fields_and_touches_updated_at() {
        let mut project = Project::new(CreateProject {
            name: "before".to_string(),
            description: "old".to_string(),
        });
        let created_at = project.created_at;

        project.apply_update(UpdateProject {
            id: None,
            name: Some("after".to_string()),
            description: None,
        });

        assert_eq!(project.name, "after");
        assert_eq!(project.description, "old");
        assert_eq!(project.created_at, created_at);
        assert!(project.updated_at >= created_at);
    }
}
