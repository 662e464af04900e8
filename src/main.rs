use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use job_matcher::config::{LoggingSettings, Settings};
use job_matcher::core::Matcher;
use job_matcher::routes::{self, AppState};
use job_matcher::services::{SnapshotRepository, SourceClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// RUST_LOG, when set, overrides the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    init_logging(&settings.logging);

    info!("Starting job matcher service...");
    info!("Configuration loaded successfully");

    let source = Arc::new(SourceClient::new(&settings.source).map_err(|e| {
        error!("Failed to create source client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?);

    info!(
        "Source client initialized (jobs: {}, workers: {})",
        settings.source.jobs_url, settings.source.workers_url
    );

    let repository = Arc::new(SnapshotRepository::new(source));

    // Empty snapshots are refetched on the first request
    match repository.refresh().await {
        Ok((jobs, workers)) => info!("Loaded {} jobs and {} workers", jobs, workers),
        Err(e) => error!("Initial refresh failed, starting with empty snapshots: {}", e),
    }

    let matcher = Matcher::new(settings.matching.max_results);

    info!("Matcher initialized (max results: {})", matcher.max_results());

    let app_state = AppState { repository, matcher };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);
    info!("API docs at http://{}:{}/matcher-api/swagger-ui/", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
