//! Job Matcher - ranks the job postings a worker is eligible for
//!
//! The core engine filters jobs through five eligibility rules (skills,
//! certificates, driver's licence, distance, availability) and returns the
//! best paying matches. The service layer fetches the job and worker
//! collections over HTTP and exposes the engine through actix-web.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance::distance, match_jobs_for_worker, MatchError, MatchResult, Matcher};
pub use models::{Job, Worker};
