use thiserror::Error;

/// Errors returned by the matching engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("worker not found: {0}")]
    NotFound(String),

    #[error("malformed data in job {job_id}: {reason}")]
    MalformedData { job_id: String, reason: String },
}

impl MatchError {
    pub(crate) fn malformed(job_id: &str, reason: impl Into<String>) -> Self {
        MatchError::MalformedData {
            job_id: job_id.to_string(),
            reason: reason.into(),
        }
    }
}
