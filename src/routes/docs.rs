use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::{
    ErrorResponse, HealthResponse, Job, JobSearchAddress, Location, RefreshResponse, Worker,
    WorkerAvailability, WorkerName,
};
use crate::routes::workers;

pub const OPENAPI_JSON_PATH: &str = "/matcher-api/api-docs/openapi.json";

/// OpenAPI description of the matcher API
#[derive(OpenApi)]
#[openapi(
    info(title = "Job Matcher API", description = "Best paying eligible jobs for a worker"),
    paths(workers::find_jobs_for_worker, workers::refresh, workers::health_check),
    components(schemas(
        Job,
        Location,
        Worker,
        WorkerName,
        WorkerAvailability,
        JobSearchAddress,
        ErrorResponse,
        HealthResponse,
        RefreshResponse
    )),
    tags((name = "workers", description = "Job matching for workers"))
)]
pub struct ApiDoc;

/// Swagger UI at `/matcher-api/swagger-ui/`, backed by the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/matcher-api/swagger-ui/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
