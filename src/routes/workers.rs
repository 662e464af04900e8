use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, Job, RefreshResponse};
use crate::routes::error::ApiError;
use crate::services::SnapshotRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<SnapshotRepository>,
    pub matcher: Matcher,
}

/// Configure all worker-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/refresh", web::post().to(refresh))
        .route("/worker/{id}/jobs", web::get().to(find_jobs_for_worker));
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/matcher-api/health",
    tag = "workers",
    responses(
        (status = 200, description = "Service status and snapshot sizes", body = HealthResponse)
    )
)]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let jobs = state.repository.jobs().await.len();
    let workers = state.repository.workers().await.len();

    let status = if jobs > 0 && workers > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        jobs,
        workers,
        timestamp: chrono::Utc::now(),
    })
}

/// Refetch both source collections
///
/// POST /matcher-api/refresh
#[utoipa::path(
    post,
    path = "/matcher-api/refresh",
    tag = "workers",
    responses(
        (status = 200, description = "Collection sizes after the refetch", body = RefreshResponse),
        (status = 503, description = "Source unavailable", body = ErrorResponse)
    )
)]
pub async fn refresh(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let (jobs, workers) = state.repository.refresh().await?;

    Ok(HttpResponse::Ok().json(RefreshResponse { jobs, workers }))
}

/// Best paying jobs the worker is eligible for
///
/// GET /matcher-api/worker/{id}/jobs
///
/// Eligibility:
/// - the job title is one of the worker's skills
/// - the worker holds every required certificate
/// - the worker has a driver's licence if the job requires one
/// - the job is within the worker's maximum distance
/// - the job starts on a day the worker is available
#[utoipa::path(
    get,
    path = "/matcher-api/worker/{id}/jobs",
    tag = "workers",
    params(
        ("id" = String, Path, description = "Worker id, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Up to three eligible jobs, best paid first", body = [Job]),
        (status = 400, description = "Blank worker id", body = ErrorResponse),
        (status = 404, description = "No worker with that id", body = ErrorResponse),
        (status = 502, description = "Malformed job data from the source", body = ErrorResponse),
        (status = 503, description = "Source unavailable", body = ErrorResponse)
    )
)]
pub async fn find_jobs_for_worker(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let worker_id = path.into_inner();

    tracing::info!("Finding jobs for worker: {}", worker_id);

    let snapshot = state.repository.snapshot().await?;
    let result = state
        .matcher
        .find_matches(&worker_id, &snapshot.workers, &snapshot.jobs)?;

    tracing::info!(
        "Returning {} jobs for worker {} ({} eligible of {})",
        result.jobs.len(),
        worker_id,
        result.eligible,
        result.total_jobs
    );

    Ok(HttpResponse::Ok().json(result.jobs))
}
