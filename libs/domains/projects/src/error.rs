use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Convert ProjectError to AppError for standardized error responses.
///
/// The mapping is fixed: not-found → 404, invalid input → 400,
/// unprocessable → 422, everything else → 500. The response message is the
/// error's own message, unchanged.
impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        let message = err.to_string();
        match err {
            ProjectError::NotFound(_) => AppError::NotFound(message),
            ProjectError::Validation(_) => AppError::BadRequest(message),
            ProjectError::Unprocessable(_) => AppError::UnprocessableEntity(message),
            ProjectError::Internal(_) => AppError::Internal(message),
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
