use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tracker API",
        version = "0.1.0",
        description = "API for creating and tracking projects"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/projects", api = domain_projects::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
