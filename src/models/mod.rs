// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Job, JobSearchAddress, Location, Worker, WorkerAvailability, WorkerName};
pub use responses::{ErrorResponse, HealthResponse, RefreshResponse};
