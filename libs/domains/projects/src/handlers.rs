use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProjectResult;
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

/// OpenAPI tag for project endpoints
pub const TAG: &str = "projects";

/// OpenAPI documentation for the Projects API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
    ),
    components(schemas(Project, CreateProject, UpdateProject, axum_helpers::ErrorResponse)),
    tags(
        (name = TAG, description = "Project management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the project router with all HTTP endpoints
pub fn router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(shared_service)
}

/// List projects with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProjectFilter),
    responses(
        (status = 200, description = "List of projects", body = Vec<Project>)
    )
)]
async fn list_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    Query(filter): Query<ProjectFilter>,
) -> ProjectResult<Json<Vec<Project>>> {
    let projects = service.list_projects(filter).await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 400, description = "Missing or invalid project name", body = axum_helpers::ErrorResponse)
    )
)]
async fn create_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> ProjectResult<impl IntoResponse> {
    let project = service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 400, description = "Invalid project ID", body = axum_helpers::ErrorResponse),
        (status = 404, description = "Project not found", body = axum_helpers::ErrorResponse)
    )
)]
async fn get_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<Project>> {
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, description = "Invalid input", body = axum_helpers::ErrorResponse),
        (status = 404, description = "Project not found", body = axum_helpers::ErrorResponse),
        (status = 422, description = "Body id does not match path id", body = axum_helpers::ErrorResponse)
    )
)]
async fn update_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> ProjectResult<Json<Project>> {
    let project = service.update_project(id, input).await?;
    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted (idempotent)"),
        (status = 400, description = "Invalid project ID", body = axum_helpers::ErrorResponse)
    )
)]
async fn delete_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<impl IntoResponse> {
    service.delete_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
