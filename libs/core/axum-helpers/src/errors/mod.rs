pub mod handlers;

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error response carries the same shape, so clients get consistent
/// error information:
/// - `status`: HTTP status code, always matching the response status line
/// - `error`: machine-readable error identifier (e.g. "NOT_FOUND")
/// - `path`: the request path that produced the error
/// - `message`: human-readable message from the originating error
/// - `timestamp`: when the error body was constructed
///
/// # JSON Example
///
/// ```json
/// {
///   "status": 404,
///   "error": "NOT_FOUND",
///   "path": "/api/projects/0198f0a2-...",
///   "message": "Project not found: 0198f0a2-...",
///   "timestamp": "2026-08-07T10:15:00Z"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Request path; filled in by the [`error_context`] middleware
    pub path: String,
    /// Human-readable error message
    pub message: String,
    /// Construction time, RFC 3339
    pub timestamp: DateTime<Utc>,
}

/// Marker stored in response extensions by [`AppError::into_response`] so
/// [`error_context`] can rebuild the body with the request path.
#[derive(Clone)]
pub(crate) struct ErrorMeta {
    pub error: &'static str,
    pub message: String,
}

/// Application error type that converts to HTTP responses.
///
/// The variants are a fixed table: each maps to exactly one status code.
/// Anything a handler cannot express with the first three kinds falls
/// through as `Internal` and surfaces as a 500.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE_ENTITY", msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        error_response(status, kind, message)
    }
}

/// Build an error response with the standard body shape.
///
/// The `path` field is left empty here; responses that pass through the
/// [`error_context`] middleware get it filled with the request path.
pub fn error_response(status: StatusCode, kind: &'static str, message: String) -> Response {
    let body = Json(ErrorResponse {
        status: status.as_u16(),
        error: kind.to_string(),
        path: String::new(),
        message: message.clone(),
        timestamp: Utc::now(),
    });

    let mut response = (status, body).into_response();
    response
        .extensions_mut()
        .insert(ErrorMeta { error: kind, message });
    response
}

/// Middleware that stamps error bodies with the request path.
///
/// Error responses built through [`error_response`] carry an [`ErrorMeta`]
/// extension; when one passes through, the body is re-rendered with the
/// path of the request that produced it. Successful responses pass
/// through untouched.
pub async fn error_context(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let Some(meta) = response.extensions().get::<ErrorMeta>().cloned() else {
        return response;
    };

    let status = response.status();
    let body = Json(ErrorResponse {
        status: status.as_u16(),
        error: meta.error.to_string(),
        path,
        message: meta.message,
        timestamp: Utc::now(),
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "BAD_REQUEST");
        assert_eq!(body["message"], "name is required");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Project not found: 42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Project not found: 42");
    }

    #[tokio::test]
    async fn test_unprocessable_entity_maps_to_422() {
        let response = AppError::UnprocessableEntity("id mismatch".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["status"], 422);
        assert_eq!(body["error"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["message"], "id mismatch");
    }

    #[tokio::test]
    async fn test_internal_maps_to_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "boom");
    }

    #[tokio::test]
    async fn test_error_context_fills_request_path() {
        async fn failing() -> AppError {
            AppError::NotFound("nothing here".to_string())
        }

        let app = Router::new()
            .route("/missing", get(failing))
            .layer(middleware::from_fn(error_context));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["path"], "/missing");
        assert_eq!(body["message"], "nothing here");
    }

    #[tokio::test]
    async fn test_error_context_leaves_success_untouched() {
        async fn ok() -> &'static str {
            "fine"
        }

        let app = Router::new()
            .route("/ok", get(ok))
            .layer(middleware::from_fn(error_context));

        let response = app
            .oneshot(HttpRequest::builder().uri("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"fine");
    }
}
